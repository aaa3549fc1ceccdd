//! # agri-core
//!
//! Domain logic for AgriAI Hub, a bilingual (English/Bengali) farming
//! assistant demo. Everything runs locally: a key/value store stands in for
//! a backend, "AI" output is random numbers in plausible ranges, and the
//! chatbot answers from a keyword table.
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  agri-web (Leptos)                                           │
//! │    pages ─► AuthService ─► MockDatabase ─► KeyValueStore     │
//! │      │                                     ├ BrowserStorage  │
//! │      │                                     └ MemoryStore     │
//! │      ├──► PredictionGenerator / SoilAnalyzer (rand)          │
//! │      ├──► ChatResponder + Conversation                       │
//! │      └──► dashboard::{OverviewStats, SensorAverages, csv}    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing in this crate touches the DOM, so all of it is tested natively.

pub mod auth;
pub mod chat;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod generator;
pub mod i18n;
pub mod model;
pub mod store;

pub use auth::{AuthService, LoginForm, LoginOutcome, SignupForm, SignupRequest};
pub use chat::{ChatResponder, Conversation, QuickAction, quick_actions};
pub use config::SimulationConfig;
pub use error::{AgriError, Result};
pub use generator::{PredictionGenerator, PredictionRequest, SensorSimulator, SoilAnalyzer};
pub use i18n::{Language, Translations};
pub use model::{
    ChatMessage, Farm, Prediction, ProfileUpdate, Role, SensorData, SensorSource, SizeUnit,
    SoilAnalysis, Subscription, User,
};
pub use store::{KeyValueStore, MemoryStore, MockDatabase};

/// Crate version, reported by the static host's health check
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
