//! Profile Page

use agri_core::{Language, ProfileUpdate};
use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::dom;
use crate::state::{AppState, use_app_state};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let state = use_app_state();

    view! {
        <Show
            when=move || state.user.with(Option::is_some)
            fallback=|| view! { <Redirect path="/auth" /> }
        >
            <ProfileForm />
        </Show>
    }
}

#[component]
fn ProfileForm() -> impl IntoView {
    let state = use_app_state();
    let current = state.user.get_untracked();
    let user = current.as_ref();
    let email = user.map(|u| u.email.clone()).unwrap_or_default();

    let (name, set_name) = signal(user.map(|u| u.name.clone()).unwrap_or_default());
    let (phone, set_phone) = signal(user.and_then(|u| u.phone.clone()).unwrap_or_default());
    let (location, set_location) = signal(user.and_then(|u| u.location.clone()).unwrap_or_default());
    // Not persisted anywhere
    let (notifications, set_notifications) = signal(true);

    let save = move |_| {
        let update = ProfileUpdate {
            name: Some(name.get_untracked()),
            phone: Some(phone.get_untracked()),
            location: Some(location.get_untracked()),
            language: Some(state.language.get_untracked()),
        };
        match AppState::auth().update_profile(update) {
            Ok(user) => {
                state.user.set(Some(user));
                state.show_success(state.t().common.success);
            }
            Err(e) => {
                dom::log_error("Could not update profile", &e);
                state.show_error(e.user_message());
            }
        }
    };

    view! {
        <div class="profile">
            <h1>{move || state.t().dashboard.profile}</h1>

            <div class="card">
                <h3>"👤 "{move || state.t().dashboard.personal_info}</h3>
                <label class="field">
                    {move || state.t().auth.name}
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    {move || state.t().auth.email}
                    <input type="email" value=email disabled />
                </label>
                <label class="field">
                    {move || state.t().auth.phone}
                    <input
                        type="tel"
                        placeholder="+880 1XXXXXXXXX"
                        prop:value=move || phone.get()
                        on:input=move |ev| set_phone.set(event_target_value(&ev))
                    />
                </label>
            </div>

            <div class="card">
                <h3>"📍 "{move || state.t().dashboard.location}</h3>
                <input
                    type="text"
                    placeholder="Dhaka, Bangladesh"
                    prop:value=move || location.get()
                    on:input=move |ev| set_location.set(event_target_value(&ev))
                />
            </div>

            <div class="card">
                <h3>"🌐 "{move || state.t().dashboard.language_pref}</h3>
                <select on:change=move |ev| {
                    if let Some(lang) = Language::from_code(&event_target_value(&ev)) {
                        state.language.set(lang);
                    }
                }>
                    {Language::ALL
                        .into_iter()
                        .map(|lang| view! {
                            <option value=lang.code() selected=move || state.language.get() == lang>
                                {lang.native_name()}
                            </option>
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="card">
                <h3>"🔔 "{move || state.t().dashboard.notifications}</h3>
                <label class="switch-row">
                    <span>{move || state.t().dashboard.enable_notifications}</span>
                    <input
                        type="checkbox"
                        role="switch"
                        prop:checked=move || notifications.get()
                        on:change=move |ev| set_notifications.set(event_target_checked(&ev))
                    />
                </label>
            </div>

            <button class="btn btn-primary btn-block" on:click=save>
                {move || state.t().dashboard.save_changes}
            </button>
        </div>
    }
}
