//! Fallback for unknown routes

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::use_app_state;

#[component]
pub fn NotFound() -> impl IntoView {
    let state = use_app_state();

    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>{move || state.t().common.not_found}</p>
            <A href="/" attr:class="btn btn-primary">{move || state.t().common.go_home}</A>
        </div>
    }
}
