//! Router
//!
//! Every path that is not `/health` or a file in the static directory gets
//! `index.html`, so client-side routes such as `/dashboard` load the app.

use axum::{Router, routing::get};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::handlers::health_check;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let static_dir = &state.config.static_dir;
    let frontend = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(frontend)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    const INDEX: &str = "<!DOCTYPE html><html><body>agri</body></html>";

    fn app_in(dir: &std::path::Path) -> Router {
        router(AppState::new(ServerConfig {
            bind_addr: "127.0.0.1:0".into(),
            static_dir: dir.to_path_buf(),
        }))
    }

    async fn fetch(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    fn built_frontend() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), INDEX).unwrap();
        std::fs::write(dir.path().join("agri-web.js"), "export default 1;").unwrap();
        dir
    }

    #[tokio::test]
    async fn test_health_reports_frontend() {
        let dir = built_frontend();
        let (status, body) = fetch(app_in(dir.path()), "/health").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["version"], agri_core::VERSION);
        assert_eq!(json["frontend_built"], true);
    }

    #[tokio::test]
    async fn test_health_without_build() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = fetch(app_in(dir.path()), "/health").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["frontend_built"], false);
    }

    #[tokio::test]
    async fn test_serves_static_files() {
        let dir = built_frontend();
        let (status, body) = fetch(app_in(dir.path()), "/agri-web.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "export default 1;");
    }

    #[tokio::test]
    async fn test_client_routes_fall_back_to_index() {
        let dir = built_frontend();
        for uri in ["/", "/dashboard", "/auth?tab=signup", "/no/such/page"] {
            let (status, body) = fetch(app_in(dir.path()), uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(body, INDEX, "{uri}");
        }
    }
}
