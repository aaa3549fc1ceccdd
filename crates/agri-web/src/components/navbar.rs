//! Top navigation bar

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::use_app_state;

#[component]
pub fn Navbar() -> impl IntoView {
    let state = use_app_state();
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class="navbar">
            <A href="/" attr:class="brand">
                <span class="logo">"🌾"</span>
                <span>"AgriAI Hub"</span>
            </A>

            <button
                class="menu-toggle"
                aria-label="Menu"
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>

            <div class="nav-links" class:open=move || menu_open.get()>
                <A href="/">{move || state.t().nav.home}</A>
                <Show when=move || state.user.with(Option::is_some)>
                    <A href="/dashboard">{move || state.t().nav.dashboard}</A>
                </Show>

                <button
                    class="btn btn-ghost language-toggle"
                    title=move || state.t().nav.language
                    on:click=move |_| state.toggle_language()
                >
                    "🌐 "{move || state.language.get().toggled().native_name()}
                </button>

                <Show
                    when=move || state.user.with(Option::is_some)
                    fallback=move || view! {
                        <A href="/auth" attr:class="btn btn-ghost">{move || state.t().nav.login}</A>
                        <A href="/auth?tab=signup" attr:class="btn btn-primary">
                            {move || state.t().nav.signup}
                        </A>
                    }
                >
                    <A href="/profile" attr:class="btn btn-ghost">
                        {move || state.user.with(|u| u.as_ref().map(|u| u.name.clone()).unwrap_or_default())}
                    </A>
                    // Plain anchor: the router handles the navigation home
                    <a
                        href="/"
                        class="btn btn-outline"
                        on:click=move |_| {
                            state.logout();
                            set_menu_open.set(false);
                        }
                    >
                        {move || state.t().nav.logout}
                    </a>
                </Show>
            </div>
        </nav>
    }
}
