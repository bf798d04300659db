//! Campaign grid and creation flow.
//!
//! Fetches the campaign list from the contract, renders one card per
//! campaign and wires the creation modal's `save` callback to the mint
//! operation followed by a refetch.

use leptos::*;

use crate::components::{push_toast, AddCampaignModal, CampaignCard};
use crate::services::{MinterContract, WalletSession};
use crate::types::{Campaign, DraftCampaign, Toast, ToastKind};

#[component]
pub fn CampaignList(
    contract: MinterContract,
    session: WalletSession,
    set_toasts: WriteSignal<Vec<Toast>>,
    /// Forwarded to the cards and invoked after a successful mint
    #[prop(into)]
    update_balance: Callback<()>,
) -> impl IntoView {
    let (campaigns, set_campaigns) = create_signal(Vec::<Campaign>::new());

    // Initial fetch
    {
        let contract = contract.clone();
        spawn_local(async move {
            match contract.fetch_campaigns().await {
                Ok(list) => set_campaigns.set(list),
                Err(e) => {
                    log::error!("❌ Failed to load campaigns: {}", e);
                    push_toast(set_toasts, ToastKind::Error, "Failed to load campaigns.");
                }
            }
        });
    }

    let on_save = {
        let contract = contract.clone();
        let executor = session.executor.clone();
        Callback::new(move |draft: DraftCampaign| {
            let contract = contract.clone();
            let executor = executor.clone();
            spawn_local(async move {
                match contract.create_campaign(&executor, &draft).await {
                    Ok(()) => {
                        push_toast(
                            set_toasts,
                            ToastKind::Success,
                            &format!("Campaign \"{}\" created!", draft.name),
                        );
                        update_balance.call(());
                        // Pick up the freshly minted campaign
                        match contract.fetch_campaigns().await {
                            Ok(list) => set_campaigns.set(list),
                            Err(e) => log::warn!("Could not refresh campaigns: {}", e),
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Campaign creation failed: {}", e);
                        push_toast(set_toasts, ToastKind::Error, "Failed to create campaign.");
                    }
                }
            });
        })
    };

    let address = session.address.clone();

    view! {
        <div class="campaigns-header">
            <h2>"Campaign Collection"</h2>
            <AddCampaignModal save=on_save address=address/>
        </div>

        <div class="campaigns-grid">
            <For
                each=move || campaigns.get()
                key=|campaign| campaign.index
                children={
                    let contract = contract.clone();
                    let session = session.clone();
                    move |campaign| {
                        view! {
                            <CampaignCard
                                campaign=campaign
                                contract=contract.clone()
                                session=session.clone()
                                set_toasts=set_toasts
                                update_balance=update_balance
                            />
                        }
                    }
                }
            />
        </div>
    }
}
