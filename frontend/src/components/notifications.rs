//! Toast notifications.
//!
//! Toasts are queued in a signal owned by the app shell and removed
//! again by a timer, so callers only ever push.

use std::cell::Cell;

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::config::TOAST_LIFETIME_MS;
use crate::types::{Toast, ToastKind};

thread_local! {
    // Single-threaded per the browser main-thread model
    static NEXT_TOAST_ID: Cell<u32> = Cell::new(0);
}

/// Queue a toast and schedule its removal after [`TOAST_LIFETIME_MS`].
pub fn push_toast(set_toasts: WriteSignal<Vec<Toast>>, kind: ToastKind, message: &str) {
    let id = NEXT_TOAST_ID.with(|next| {
        let id = next.get();
        next.set(id.wrapping_add(1));
        id
    });

    set_toasts.update(|toasts| {
        toasts.push(Toast {
            id,
            kind,
            message: message.to_string(),
        });
    });

    spawn_local(async move {
        TimeoutFuture::new(TOAST_LIFETIME_MS).await;
        set_toasts.update(|toasts| toasts.retain(|t| t.id != id));
    });
}

/// Stack of queued toasts, newest at the bottom.
#[component]
pub fn ToastStack(toasts: ReadSignal<Vec<Toast>>) -> impl IntoView {
    view! {
        <div class="toast-stack" id="toastStack">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let icon = match toast.kind {
                        ToastKind::Success => "✅",
                        ToastKind::Error => "❌",
                    };
                    view! {
                        <div class=format!("toast {}", toast.kind.css_class())>
                            <span class="toast-icon">{icon}</span>
                            {toast.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
