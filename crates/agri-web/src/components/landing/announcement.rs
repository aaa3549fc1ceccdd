//! Dismissible offer banner

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::use_app_state;

#[component]
pub fn AnnouncementBar() -> impl IntoView {
    let state = use_app_state();
    let (visible, set_visible) = signal(true);

    view! {
        <Show when=move || visible.get()>
            <div class="announcement">
                <span class="announcement-text">{move || state.t().landing.offer}</span>
                <A href="/auth?tab=signup" attr:class="announcement-cta">
                    {move || state.t().landing.claim_now}" →"
                </A>
                <button
                    class="announcement-close"
                    aria-label="Close announcement"
                    on:click=move |_| set_visible.set(false)
                >
                    "✕"
                </button>
            </div>
        </Show>
    }
}
