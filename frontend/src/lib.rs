//! GiveCelo - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for browsing, funding and creating crowdfunding
//! campaigns minted as NFTs on the Celo blockchain.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ToastStack (success/error notifications)                    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Cover (no wallet)  or  Header + CampaignList (connected)   │
//! │  CampaignList                                                │
//! │  ├── AddCampaignModal (creation form)                       │
//! │  └── CampaignCard × n (donate / withdraw per role)          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (Campaign, DraftCampaign, Toast, etc.)
//! - [`components`] - UI components (Header, Card, Add modal, etc.)
//! - [`services`] - External collaborators (wallet, minter contract, storage)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod services;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Campaigns
    Campaign, DraftCampaign,
    // Toasts
    Toast, ToastKind,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 GiveCelo - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <Routes>
                <Route path="/" view=MainContent/>
            </Routes>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Global state for the application
    let (session_state, set_session_state) =
        create_signal(None::<(WalletSession, MinterContract)>);
    let (balance, set_balance) = create_signal(None::<String>);
    let (toasts, set_toasts) = create_signal(Vec::<Toast>::new());

    // Refetch the connected address's balance; wired into the campaign
    // actions so the header chip tracks spent and received funds
    let update_balance = Callback::new(move |_: ()| {
        let Some((session, _)) = session_state.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match CeloWallet::get_balance(&session.address).await {
                Ok(bal) => set_balance.set(Some(bal.formatted)),
                Err(e) => log::warn!("Could not refresh balance: {}", e),
            }
        });
    });

    let on_connect = Callback::new(move |_: ()| {
        log::info!("🔑 Attempting to connect wallet...");

        spawn_local(async move {
            match CeloWallet::connect().await {
                Ok(session) => {
                    // Fetch balance
                    match CeloWallet::get_balance(&session.address).await {
                        Ok(bal) => {
                            log::info!("💰 Balance: {} {}", bal.formatted, NATIVE_SYMBOL);
                            set_balance.set(Some(bal.formatted));
                        }
                        Err(e) => {
                            log::warn!("Could not fetch balance: {}", e);
                            set_balance.set(Some("?".to_string()));
                        }
                    }

                    match MinterContract::connect().await {
                        Ok(contract) => set_session_state.set(Some((session, contract))),
                        Err(e) => {
                            log::error!("❌ Contract connection failed: {}", e);
                            push_toast(
                                set_toasts,
                                ToastKind::Error,
                                "Failed to reach the minter contract.",
                            );
                        }
                    }
                }
                Err(e) => {
                    log::error!("❌ Wallet connection failed: {}", e);
                }
            }
        });
    });

    let on_disconnect = Callback::new(move |_: ()| {
        spawn_local(async move {
            if let Err(e) = CeloWallet::disconnect().await {
                log::warn!("Disconnect reported: {}", e);
            }
            set_session_state.set(None);
            set_balance.set(None);
        });
    });

    view! {
        <ToastStack toasts=toasts/>

        {move || match session_state.get() {
            Some((session, contract)) => view! {
                <Header
                    address=session.address.clone()
                    balance=balance
                    disconnect=on_disconnect
                />
                <main class="container">
                    <CampaignList
                        contract=contract
                        session=session
                        set_toasts=set_toasts
                        update_balance=update_balance
                    />
                </main>
                <Footer/>
            }
            .into_view(),
            None => view! { <Cover connect=on_connect/> }.into_view(),
        }}
    }
}
