//! Campaign card with role-gated donate/withdraw actions.

use leptos::*;

use crate::components::{push_toast, Identicon};
use crate::config::NATIVE_SYMBOL;
use crate::services::{MinterContract, WalletSession};
use crate::types::{truncate_address, AppResult, Campaign, Toast, ToastKind};

/// Capability set of whoever is looking at a card.
///
/// Dispatched once per render from the owner / connected address pair;
/// owners can only withdraw, everyone else can only donate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CardRole {
    /// Connected address created this campaign
    Owner,
    /// Any other connected address
    Viewer,
}

impl CardRole {
    pub fn of(owner: &str, connected: &str) -> Self {
        if owner == connected {
            CardRole::Owner
        } else {
            CardRole::Viewer
        }
    }
}

/// Settle a finished donate call: the input fields are cleared whichever
/// way the call ended, then the result collapses to one generic toast.
fn donate_outcome(result: AppResult<()>, clear_fields: impl FnOnce()) -> (ToastKind, &'static str) {
    clear_fields();
    match result {
        Ok(()) => (ToastKind::Success, "Donation made successfully!"),
        Err(e) => {
            log::error!("❌ Donation failed: {}", e);
            (ToastKind::Error, "Failed to make donation.")
        }
    }
}

/// Settle a finished withdraw call. No field is touched: the id stays
/// as typed, unlike the donate flow.
fn withdraw_outcome(result: AppResult<()>) -> (ToastKind, &'static str) {
    match result {
        Ok(()) => (ToastKind::Success, "Withdraw successfully!"),
        Err(e) => {
            log::error!("❌ Withdrawal failed: {}", e);
            (ToastKind::Error, "Failed to make withdrawal.")
        }
    }
}

#[component]
pub fn CampaignCard(
    campaign: Campaign,
    contract: MinterContract,
    session: WalletSession,
    set_toasts: WriteSignal<Vec<Toast>>,
    /// Invoked after a successful contract action so the header balance
    /// reflects the spent or received funds
    #[prop(into)]
    update_balance: Callback<()>,
) -> impl IntoView {
    let role = CardRole::of(&campaign.owner, &session.address);

    // Raised funds are seeded once from the fetched value and only move
    // again through the setter handed into the donate call.
    let (donated, set_donated) = create_signal(campaign.raised_celo());
    let (campaign_id, set_campaign_id) = create_signal(String::new());
    let (amount, set_amount) = create_signal(String::new());
    let (is_busy, set_is_busy) = create_signal(false);

    let on_donate = {
        let contract = contract.clone();
        let executor = session.executor.clone();
        move |_| {
            let contract = contract.clone();
            let executor = executor.clone();
            spawn_local(async move {
                set_is_busy.set(true);

                let result = contract
                    .donate(
                        &executor,
                        &amount.get_untracked(),
                        move |raised| set_donated.set(raised),
                        &campaign_id.get_untracked(),
                    )
                    .await;

                let (kind, message) = donate_outcome(result, || {
                    set_amount.set(String::new());
                    set_campaign_id.set(String::new());
                });
                push_toast(set_toasts, kind, message);
                if kind == ToastKind::Success {
                    update_balance.call(());
                }

                set_is_busy.set(false);
            });
        }
    };

    let on_withdraw = {
        let contract = contract.clone();
        let executor = session.executor.clone();
        move |_| {
            let contract = contract.clone();
            let executor = executor.clone();
            spawn_local(async move {
                set_is_busy.set(true);

                let result = contract
                    .withdraw(&executor, &campaign_id.get_untracked())
                    .await;

                let (kind, message) = withdraw_outcome(result);
                push_toast(set_toasts, kind, message);
                if kind == ToastKind::Success {
                    update_balance.call(());
                }

                set_is_busy.set(false);
            });
        }
    };

    view! {
        <div class="campaign-card">
            <div class="card-header">
                <Identicon address=campaign.owner.clone() size=28/>
                <span class="owner-address">{truncate_address(&campaign.owner)}</span>
                <span class="badge">{campaign.index} " ID"</span>
                {match role {
                    CardRole::Owner => view! {
                        <button class="btn btn-action" on:click=on_withdraw>
                            {move || if is_busy.get() { "Withdrawing..." } else { "Withdraw" }}
                        </button>
                    }
                    .into_view(),
                    CardRole::Viewer => view! {
                        <button class="btn btn-action" on:click=on_donate>
                            {move || if is_busy.get() { "Donating..." } else { "Donate" }}
                        </button>
                    }
                    .into_view(),
                }}
            </div>

            <div class="card-image">
                <img src=campaign.image.clone() alt=campaign.description.clone()/>
            </div>

            <div class="card-body">
                <div class="card-title">{campaign.name.clone()}</div>
                <div class="card-description">{campaign.description.clone()}</div>

                <div class="card-stats">
                    <div class="stat">
                        <div class="stat-label">"Goal"</div>
                        <div class="stat-value">{campaign.goal} " " {NATIVE_SYMBOL}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-label">"Funds raised"</div>
                        <div class="stat-value">
                            {move || format!("{:.1} {}", donated.get(), NATIVE_SYMBOL)}
                        </div>
                    </div>
                </div>

                {match role {
                    CardRole::Owner => view! {
                        <div class="card-actions">
                            <div class="card-actions-label">"Withdraw Funds"</div>
                            <input
                                type="text"
                                placeholder="campaign ID"
                                prop:value=move || campaign_id.get()
                                on:input=move |ev| set_campaign_id.set(event_target_value(&ev))
                            />
                        </div>
                    }
                    .into_view(),
                    CardRole::Viewer => view! {
                        <div class="card-actions">
                            <div class="card-actions-label">"Donate to this campaign"</div>
                            <input
                                type="text"
                                placeholder="campaign ID"
                                prop:value=move || campaign_id.get()
                                on:input=move |ev| set_campaign_id.set(event_target_value(&ev))
                            />
                            <input
                                type="number"
                                placeholder="Donation amount"
                                prop:value=move || amount.get()
                                on:input=move |ev| set_amount.set(event_target_value(&ev))
                            />
                        </div>
                    }
                    .into_view(),
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AppError;
    use std::cell::RefCell;

    #[test]
    fn test_role_dispatch_is_exhaustive_and_exclusive() {
        assert_eq!(CardRole::of("0xA", "0xA"), CardRole::Owner);
        assert_eq!(CardRole::of("0xA", "0xB"), CardRole::Viewer);
        // Addresses are compared verbatim, no checksum normalization
        assert_eq!(CardRole::of("0xa", "0xA"), CardRole::Viewer);
    }

    fn typed_fields() -> (RefCell<String>, RefCell<String>) {
        (RefCell::new("3".to_string()), RefCell::new("2.5".to_string()))
    }

    #[test]
    fn test_donate_clears_fields_on_success() {
        let (id, amount) = typed_fields();
        let (kind, _) = donate_outcome(Ok(()), || {
            id.borrow_mut().clear();
            amount.borrow_mut().clear();
        });
        assert_eq!(kind, ToastKind::Success);
        assert!(id.borrow().is_empty());
        assert!(amount.borrow().is_empty());
    }

    #[test]
    fn test_donate_clears_fields_on_failure_too() {
        let (id, amount) = typed_fields();
        let (kind, message) = donate_outcome(Err(AppError::Contract("reverted".into())), || {
            id.borrow_mut().clear();
            amount.borrow_mut().clear();
        });
        assert_eq!(kind, ToastKind::Error);
        // One generic message regardless of the failure flavor
        assert_eq!(message, "Failed to make donation.");
        assert!(id.borrow().is_empty());
        assert!(amount.borrow().is_empty());
    }

    #[test]
    fn test_withdraw_leaves_id_field_as_typed() {
        let (id, _) = typed_fields();
        let (kind, _) = withdraw_outcome(Ok(()));
        assert_eq!(kind, ToastKind::Success);
        assert_eq!(*id.borrow(), "3");

        let (kind, message) = withdraw_outcome(Err(AppError::Wallet("rejected".into())));
        assert_eq!(kind, ToastKind::Error);
        assert_eq!(message, "Failed to make withdrawal.");
        assert_eq!(*id.borrow(), "3");
    }
}
