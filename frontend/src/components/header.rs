use leptos::*;

use crate::components::Identicon;
use crate::config::NATIVE_SYMBOL;
use crate::types::truncate_address;

#[component]
pub fn Header(
    /// Connected wallet address
    address: String,
    /// Formatted native balance, `None` while loading
    balance: ReadSignal<Option<String>>,
    /// Invoked when the user clicks the wallet chip
    #[prop(into)]
    disconnect: Callback<()>,
) -> impl IntoView {
    let truncated = truncate_address(&address);

    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">"GIVECELO"</a>
                <span class="badge">
                    {move || {
                        if let Some(bal) = balance.get() {
                            format!("{} {}", bal, NATIVE_SYMBOL)
                        } else {
                            format!("-- {}", NATIVE_SYMBOL)
                        }
                    }}
                </span>
            </div>
            <div class="header-right">
                <div
                    class="wallet-status connected"
                    on:click=move |_| disconnect.call(())
                    style="cursor: pointer;"
                    title="Disconnect"
                >
                    <Identicon address=address.clone() size=24/>
                    <span id="walletText">{truncated}</span>
                </div>
            </div>
        </header>
    }
}
