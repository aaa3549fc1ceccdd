//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::components::{ConnectionStatus, Navbar, Toasts};
use crate::pages::{AuthPage, DashboardPage, LandingPage, NotFound, ProfilePage};
use crate::state::AppState;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    AppState::provide();

    view! {
        <Router>
            <Navbar />
            <main class="app">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=LandingPage />
                    <Route path=path!("/auth") view=AuthPage />
                    <Route path=path!("/dashboard") view=DashboardPage />
                    <Route path=path!("/profile") view=ProfilePage />
                </Routes>
            </main>
            <ConnectionStatus />
            <Toasts />
        </Router>
    }
}
