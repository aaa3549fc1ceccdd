//! AgriAI Hub Static Host
//!
//! Serves the Trunk-built WASM frontend with an SPA fallback and a health
//! endpoint. All application logic runs in the browser.

mod config;
mod handlers;
mod routes;
mod state;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    if !config.static_dir.join("index.html").exists() {
        tracing::warn!("⚠ No index.html in {}", config.static_dir.display());
        tracing::warn!("  Build the frontend first: cd crates/agri-web && trunk build --release");
    }

    let addr = config.bind_addr.clone();
    let static_dir = config.static_dir.display().to_string();
    let app = routes::router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🌾 AgriAI Hub running on http://{}", addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("  Static dir: {}", static_dir);
    tracing::info!("  GET  /health - Health check");

    axum::serve(listener, app).await?;

    Ok(())
}
