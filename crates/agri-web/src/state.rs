//! Global Application State
//!
//! Reactive signals shared by every page, provided once at the root.

use agri_core::{AuthService, Language, MockDatabase, SimulationConfig, Translations, User};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use uuid::Uuid;

use crate::dom;
use crate::storage::BrowserStorage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

/// Signals read across the component tree
#[derive(Clone, Copy)]
pub struct AppState {
    /// Signed-in user, mirrored into the session key
    pub user: RwSignal<Option<User>>,
    pub language: RwSignal<Language>,
    pub toasts: RwSignal<Vec<Toast>>,
    /// Browser connectivity as reported by `online`/`offline` events
    pub online: RwSignal<bool>,
    pub config: SimulationConfig,
}

impl AppState {
    /// Build state from local storage and make it available as context
    pub fn provide() -> Self {
        let auth = Self::auth();
        let user = auth.restore().unwrap_or_else(|e| {
            dom::log_error("Could not restore session", &e);
            None
        });
        let language = Language::load(&BrowserStorage);

        let state = Self {
            user: RwSignal::new(user),
            language: RwSignal::new(language),
            toasts: RwSignal::new(Vec::new()),
            online: RwSignal::new(dom::is_online()),
            config: SimulationConfig::default(),
        };

        Effect::new(move |_| {
            let lang = state.language.get();
            dom::apply_language(lang);
            if let Err(e) = lang.save(&BrowserStorage) {
                dom::log_error("Could not save language", &e);
            }
        });

        let online = state.online;
        let _ = window_event_listener_untyped("online", move |_| online.set(true));
        let _ = window_event_listener_untyped("offline", move |_| online.set(false));

        provide_context(state);
        state
    }

    /// Auth over the browser-backed mock database
    pub const fn auth() -> AuthService<BrowserStorage> {
        AuthService::new(BrowserStorage)
    }

    pub const fn database() -> MockDatabase<BrowserStorage> {
        MockDatabase::new(BrowserStorage)
    }

    /// Current translation table (tracks the language signal)
    pub fn t(&self) -> &'static Translations {
        self.language.get().translations()
    }

    pub fn toggle_language(&self) {
        self.language.update(|lang| *lang = lang.toggled());
    }

    pub fn show_success(&self, message: impl Into<String>) {
        self.push_toast(ToastKind::Success, message.into(), self.config.success_toast_ms);
    }

    pub fn show_error(&self, message: impl Into<String>) {
        self.push_toast(ToastKind::Error, message.into(), self.config.error_toast_ms);
    }

    fn push_toast(&self, kind: ToastKind, message: String, ttl_ms: u32) {
        let id = Uuid::new_v4();
        self.toasts.update(|t| t.push(Toast { id, kind, message }));

        let toasts = self.toasts;
        Timeout::new(ttl_ms, move || dismiss(toasts, id)).forget();
    }

    pub fn logout(&self) {
        if let Err(e) = Self::auth().logout() {
            dom::log_error("Could not clear session", &e);
        }
        self.user.set(None);
    }
}

pub fn dismiss(toasts: RwSignal<Vec<Toast>>, id: Uuid) {
    // The toast may already be gone if the user closed it
    toasts.try_update(|t| t.retain(|toast| toast.id != id));
}

pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}

/// Stand-in for network latency
pub async fn simulate_latency(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}
