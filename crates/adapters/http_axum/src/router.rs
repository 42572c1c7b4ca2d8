//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use kpiscorer_app::ports::AssetLocator;

use crate::assets::ASSETS_ROUTE;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges API routes under `/api`, the dashboard at `/` and the assets
/// directory under [`ASSETS_ROUTE`]. Includes a [`TraceLayer`] that logs each
/// HTTP request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<P>(state: AppState<P>) -> Router
where
    P: AssetLocator + Send + Sync + 'static,
{
    let assets = ServeDir::new(state.host_settings.assets_root());

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .merge(crate::dashboard::routes())
        .nest_service(ASSETS_ROUTE, assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use kpiscorer_app::services::bootstrap::DashboardBootstrap;
    use kpiscorer_domain::branding::Branding;
    use kpiscorer_domain::logo::LogoAssetPath;
    use tower::ServiceExt;

    use crate::assets::FsAssetLocator;
    use crate::host::HostSettings;

    fn app(base: &Path) -> Router {
        let logo = LogoAssetPath::under(base).unwrap();
        let settings = HostSettings::new(logo.assets_dir());
        let bootstrap =
            DashboardBootstrap::with_branding(&Branding::default(), logo, FsAssetLocator).unwrap();
        build(AppState::new(bootstrap, settings))
    }

    fn with_logo() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("assets")).unwrap();
        std::fs::write(dir.path().join("assets").join("logo.png"), b"logo-bytes").unwrap();
        dir
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = get_body(app(dir.path()), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn should_render_header_when_logo_exists() {
        let dir = with_logo();
        let (status, body) = get_body(app(dir.path()), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<img src=\"/assets/logo.png\" width=\"64\""));
        assert!(body.contains("<h1>KPI Đội quản lý Điện lực khu vực Định Hóa</h1>"));
    }

    #[tokio::test]
    async fn should_omit_header_when_logo_missing() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = get_body(app(dir.path()), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<style>"));
        assert!(!body.contains("<img"));
        assert!(!body.contains("<h1>"));
    }

    #[tokio::test]
    async fn should_return_page_document_as_json() {
        let dir = with_logo();
        let (status, body) = get_body(app(dir.path()), "/api/page").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["config"]["icon"], "🔐");
        assert_eq!(json["blocks"][0]["type"], "columns");
        assert_eq!(json["blocks"][0]["ratios"], serde_json::json!([1, 10]));
    }

    #[tokio::test]
    async fn should_serve_logo_file() {
        let dir = with_logo();
        let (status, body) = get_body(app(dir.path()), "/assets/logo.png").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_bytes(), b"logo-bytes");
    }
}
