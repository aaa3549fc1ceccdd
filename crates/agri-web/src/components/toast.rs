//! Toast Notifications

use leptos::prelude::*;

use crate::state::{ToastKind, dismiss, use_app_state};

#[component]
pub fn Toasts() -> impl IntoView {
    let state = use_app_state();

    view! {
        <div class="toasts" role="status" aria-live="polite">
            <For
                each=move || state.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let (icon, class) = match toast.kind {
                        ToastKind::Success => ("✓", "toast toast-success"),
                        ToastKind::Error => ("✕", "toast toast-error"),
                    };
                    let id = toast.id;
                    view! {
                        <div class=class>
                            <span class="toast-icon">{icon}</span>
                            <span class="toast-message">{toast.message}</span>
                            <button
                                class="toast-close"
                                aria-label="Close"
                                on:click=move |_| dismiss(state.toasts, id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
