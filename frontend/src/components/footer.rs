//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"Copyright © 2026 GiveCelo • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-links">
                <a href="https://celo.org" class="footer-link" target="_blank">
                    "Celo"
                </a>
                <a href="https://github.com/givecelo" class="footer-link" target="_blank">
                    "GitHub"
                </a>
            </div>
        </footer>
    }
}
