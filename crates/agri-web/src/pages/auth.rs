//! Login / Signup Page

use agri_core::{LoginForm, LoginOutcome, SignupForm, User};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::dom;
use crate::state::{AppState, simulate_latency, use_app_state};

const SELLING_POINTS: [&str; 4] = [
    "AI-powered yield predictions",
    "Offline mode support",
    "Bilingual chatbot assistant",
    "Real-time data analytics",
];

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Login,
    Signup,
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let state = use_app_state();
    let query = use_query_map();
    let initial = if query.with_untracked(|q| q.get("tab").as_deref() == Some("signup")) {
        Tab::Signup
    } else {
        Tab::Login
    };
    let (tab, set_tab) = signal(initial);

    view! {
        <div class="auth-page">
            <aside class="auth-brand">
                <A href="/" attr:class="back-link">"← Back to home"</A>
                <div class="brand">
                    <span class="logo">"🌿"</span>
                    <div>
                        <h1>"AgriAI Hub"</h1>
                        <p class="muted">"Smart Farming Platform"</p>
                    </div>
                </div>
                <h2>"Transform your farming journey"</h2>
                <p>
                    "Join thousands of farmers using AI to increase crop yields and make smarter agricultural decisions."
                </p>
                <ul class="selling-points">
                    {SELLING_POINTS.iter().map(|p| view! { <li>"✓ "{*p}</li> }).collect_view()}
                </ul>
            </aside>

            <main class="auth-panel">
                <div class="card">
                    <span class="badge">"✨ Free tier available"</span>
                    <h2>"Welcome"</h2>
                    <p class="muted">"Sign in to your account or create a new one"</p>

                    <div class="tabs" role="tablist">
                        <button
                            role="tab"
                            class:active=move || tab.get() == Tab::Login
                            on:click=move |_| set_tab.set(Tab::Login)
                        >
                            {move || state.t().nav.login}
                        </button>
                        <button
                            role="tab"
                            class:active=move || tab.get() == Tab::Signup
                            on:click=move |_| set_tab.set(Tab::Signup)
                        >
                            {move || state.t().nav.signup}
                        </button>
                    </div>

                    <Show
                        when=move || tab.get() == Tab::Signup
                        fallback=|| view! { <LoginPanel /> }
                    >
                        <SignupPanel />
                    </Show>
                </div>
            </main>
        </div>
    }
}

#[component]
fn PasswordInput(
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    #[prop(default = "••••••••")] placeholder: &'static str,
) -> impl IntoView {
    let (visible, set_visible) = signal(false);

    view! {
        <div class="password-input">
            <input
                type=move || if visible.get() { "text" } else { "password" }
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
            />
            <button
                type="button"
                class="reveal"
                aria-label="Toggle password visibility"
                on:click=move |_| set_visible.update(|v| *v = !*v)
            >
                {move || if visible.get() { "🙈" } else { "👁" }}
            </button>
        </div>
    }
}

fn finish(state: AppState, message: &'static str, user: User) {
    state.user.set(Some(user));
    state.show_success(message);
}

#[component]
fn LoginPanel() -> impl IntoView {
    let state = use_app_state();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let form = LoginForm { email: email.get_untracked(), password: password.get_untracked() };
        if let Err(e) = form.validate() {
            state.show_error(e.user_message());
            return;
        }

        set_loading.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            simulate_latency(state.config.auth_delay_ms).await;
            match AppState::auth().login_or_signup(&form.email, &form.password) {
                Ok(LoginOutcome::LoggedIn(user)) => {
                    finish(state, state.t().auth.welcome_back, user);
                    navigate("/dashboard", Default::default());
                }
                Ok(LoginOutcome::SignedUp(user)) => {
                    finish(state, state.t().auth.account_created, user);
                    navigate("/dashboard", Default::default());
                }
                Err(e) => {
                    dom::log_error("Login failed", &e);
                    state.show_error(e.user_message());
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <form class="auth-form" on:submit=submit>
            <label>
                {move || state.t().auth.email}
                <input
                    type="email"
                    required
                    placeholder="farmer@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </label>
            <label>
                <span class="label-row">
                    {move || state.t().auth.password}
                    <a href="#" class="muted">{move || state.t().auth.forgot_password}</a>
                </span>
                <PasswordInput
                    value=password
                    set_value=set_password
                />
            </label>
            <button type="submit" class="btn btn-primary btn-block" disabled=move || loading.get()>
                {move || if loading.get() { state.t().common.loading } else { state.t().auth.login_button }}
            </button>
            <p class="hint">"New email addresses get an account automatically."</p>
        </form>
    }
}

#[component]
fn SignupPanel() -> impl IntoView {
    let state = use_app_state();
    let navigate = use_navigate();
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let form = SignupForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm.get_untracked(),
        };
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => {
                state.show_error(e.user_message());
                return;
            }
        };

        set_loading.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            simulate_latency(state.config.auth_delay_ms).await;
            match AppState::auth().signup(request) {
                Ok(user) => {
                    finish(state, state.t().common.success, user);
                    navigate("/dashboard", Default::default());
                }
                Err(e) => state.show_error(e.user_message()),
            }
            set_loading.set(false);
        });
    };

    view! {
        <form class="auth-form" on:submit=submit>
            <label>
                {move || state.t().auth.name}
                <input
                    type="text"
                    required
                    placeholder="রহিম আহমেদ"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </label>
            <label>
                {move || state.t().auth.email}
                <input
                    type="email"
                    required
                    placeholder="farmer@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </label>
            <label>
                {move || state.t().auth.password}
                <PasswordInput
                    value=password
                    set_value=set_password
                />
            </label>
            <label>
                {move || state.t().auth.confirm_password}
                <PasswordInput
                    value=confirm
                    set_value=set_confirm
                />
            </label>
            <button type="submit" class="btn btn-primary btn-block" disabled=move || loading.get()>
                {move || if loading.get() { state.t().common.loading } else { state.t().auth.signup_button }}
            </button>
            <p class="hint">"By signing up, you agree to our Terms of Service and Privacy Policy."</p>
        </form>
    }
}
