//! Connectivity badge

use leptos::prelude::*;

use crate::state::use_app_state;

#[component]
pub fn ConnectionStatus() -> impl IntoView {
    let state = use_app_state();

    view! {
        <div
            class="connection-status"
            class:offline=move || !state.online.get()
        >
            <span class="dot"></span>
            {move || {
                let t = state.t();
                if state.online.get() { t.dashboard.online } else { t.dashboard.offline }
            }}
        </div>
    }
}
