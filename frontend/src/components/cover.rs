//! Landing page shown while no wallet is connected.

use leptos::*;

use crate::config::APP_NAME;

#[component]
pub fn Cover(
    /// Invoked when the user asks to connect a wallet
    #[prop(into)]
    connect: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="cover">
            <img class="cover-image" src="/img/giving.webp" alt="People giving"/>
            <h1>{APP_NAME}</h1>
            <p class="subtitle">
                "Crowdfunding campaigns minted as NFTs on the Celo blockchain. "
                "Connect a wallet to browse campaigns, donate, or start your own."
            </p>
            <button class="btn btn-primary" on:click=move |_| connect.call(())>
                "Connect Wallet"
            </button>
        </div>
    }
}
