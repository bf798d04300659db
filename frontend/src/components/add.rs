//! Campaign creation modal.
//!
//! Collects the draft fields and hands the completed draft to the
//! caller-supplied `save` callback; persistence is the caller's job.

use leptos::*;
use web_sys::Event;

use crate::services::upload_file;
use crate::types::DraftCampaign;

/// Confirm flow shared by the handler: hand the draft to `save` once,
/// then close the modal.
fn submit_draft(draft: DraftCampaign, save: impl FnOnce(DraftCampaign), close: impl FnOnce()) {
    save(draft);
    close();
}

#[component]
pub fn AddCampaignModal(
    /// Invoked with the completed draft when the user confirms
    #[prop(into)]
    save: Callback<DraftCampaign>,
    /// Connected wallet address, recorded as the campaign owner
    address: String,
) -> impl IntoView {
    let (show, set_show) = create_signal(false);

    let (name, set_name) = create_signal(String::new());
    let (image, set_image) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let (goal, set_goal) = create_signal(String::new());

    let owner = store_value(address);

    let draft = move || DraftCampaign {
        name: name.get(),
        image: image.get(),
        description: description.get(),
        goal: goal.get(),
        owner: owner.get_value(),
    };

    // The draft starts empty on every open
    let handle_show = move |_| {
        set_name.set(String::new());
        set_image.set(String::new());
        set_description.set(String::new());
        set_goal.set(String::new());
        set_show.set(true);
    };

    let handle_close = move |_| set_show.set(false);

    let on_file_change = move |ev: Event| {
        spawn_local(async move {
            match upload_file(&ev).await {
                Ok(Some(uri)) => set_image.set(uri),
                // No reference means the attempt is over; the field stays unset
                Ok(None) | Err(_) => {
                    log::warn!("⚠️  Image upload yielded no reference");
                    if let Some(window) = web_sys::window() {
                        _ = window.alert_with_message("failed to upload image");
                    }
                }
            }
        });
    };

    let on_create = move |_| {
        submit_draft(draft(), |d| save.call(d), || set_show.set(false));
    };

    view! {
        <button class="btn btn-add" on:click=handle_show>"+"</button>

        <Show when=move || show.get() fallback=|| view! {}>
            <div class="modal-backdrop">
                <div class="modal">
                    <div class="modal-header">
                        <span class="modal-title">"Create Campaign"</span>
                        <button class="modal-close" on:click=handle_close>"×"</button>
                    </div>

                    <div class="modal-body">
                        <label>"Name"</label>
                        <input
                            type="text"
                            placeholder="Name of campaign"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />

                        <label>"Description"</label>
                        <textarea
                            placeholder="Description"
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        ></textarea>

                        <label>"Image"</label>
                        <input type="file" on:change=on_file_change/>

                        <label>"Campaign Goal"</label>
                        <input
                            type="number"
                            placeholder="Set Campaign Goal"
                            prop:value=move || goal.get()
                            on:input=move |ev| set_goal.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="modal-footer">
                        <button class="btn btn-secondary" on:click=handle_close>"Close"</button>
                        <button
                            class="btn btn-primary"
                            disabled=move || !draft().is_submittable()
                            on:click=on_create
                        >
                            "Create Campaign"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[test]
    fn test_submit_hands_over_draft_once_and_closes() {
        let saved = RefCell::new(Vec::<DraftCampaign>::new());
        let closed = Cell::new(false);

        let draft = DraftCampaign {
            name: "Clean Water".into(),
            image: "ipfs://bafy.../well.png".into(),
            description: "Wells for the village".into(),
            goal: "100".into(),
            owner: "0xA1b2C3d4E5f60718293a4B5c6D7e8F9012345678".into(),
        };

        submit_draft(
            draft.clone(),
            |d| saved.borrow_mut().push(d),
            || closed.set(true),
        );

        let saved = saved.borrow();
        assert_eq!(saved.len(), 1);
        // The payload carries the connected address as owner
        assert_eq!(saved[0].owner, "0xA1b2C3d4E5f60718293a4B5c6D7e8F9012345678");
        assert_eq!(saved[0], draft);
        assert!(closed.get());
    }
}
