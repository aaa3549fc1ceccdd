//! HTTP Handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Whether `index.html` exists in the static directory
    pub frontend_built: bool,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let index = state.config.static_dir.join("index.html");
    let frontend_built = tokio::fs::try_exists(&index).await.unwrap_or(false);

    Json(HealthResponse {
        status: "healthy",
        version: agri_core::VERSION,
        frontend_built,
    })
}
