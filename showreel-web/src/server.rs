//! HTTP server for the portfolio site
//!
//! Serves the pre-rendered page, the htmx fragments, the generated assets and
//! the photo directory.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum::extract::{Path as UrlPath, State};
use axum::response::{Html, IntoResponse, Json, Response};
use axum::routing::get;
use serde::Serialize;
use showreel_core::{Catalog, ShowreelConfig};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::{Result, WebError};
use crate::htmx::{menu_region, player_frame, records_remainder};
use crate::routes;
use crate::site::RenderedSite;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub site: Arc<RenderedSite>,
    pub server_started_at: Instant,
}

impl AppState {
    pub fn new(site: RenderedSite) -> Self {
        Self {
            site: Arc::new(site),
            server_started_at: Instant::now(),
        }
    }
}

/// Builds the application router.
pub fn router(state: AppState, photos_dir: &Path) -> Router {
    Router::new()
        // Page
        .route(routes::INDEX_PATH, get(index_page))
        // htmx fragments
        .route("/fragments/player/{file}", get(player_frame))
        .route("/fragments/nav/{file}", get(menu_region))
        .route("/fragments/records/{file}", get(records_remainder))
        // Generated assets
        .route("/assets/{file}", get(asset))
        .route(routes::HEALTH_PATH, get(health))
        .nest_service(routes::PHOTOS_PREFIX, ServeDir::new(photos_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bound listener plus the router it will serve.
pub struct ShowreelServer {
    listener: TcpListener,
    app: Router,
}

impl ShowreelServer {
    /// Renders the site and binds the configured address.
    ///
    /// # Errors
    /// - `WebError::Core` - Invalid catalog or configuration
    /// - `WebError::ServerStartFailed` - Address could not be bound
    pub async fn bind(catalog: Catalog, config: ShowreelConfig) -> Result<Self> {
        let address = config.server.socket_addr();
        let photos_dir = config.server.photos_dir.clone();

        if !photos_dir.is_dir() {
            tracing::warn!(
                photos_dir = %photos_dir.display(),
                "Photo directory missing, photos will return 404"
            );
        }

        let site = RenderedSite::build(catalog, config)?;
        let app = router(AppState::new(site), &photos_dir);

        let listener = TcpListener::bind(address)
            .await
            .map_err(|source| WebError::ServerStartFailed { address, source })?;

        Ok(Self { listener, app })
    }

    /// Address actually bound, useful when the configured port was 0.
    ///
    /// # Errors
    /// - `WebError::ServerFailed` - Socket address unavailable
    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.listener.local_addr().map_err(WebError::ServerFailed)
    }

    /// Serves requests until the process stops.
    ///
    /// # Errors
    /// - `WebError::ServerFailed` - Accept loop terminated with an error
    pub async fn serve(self) -> Result<()> {
        if let Ok(address) = self.listener.local_addr() {
            tracing::info!("Showreel running on http://{address}");
        }

        axum::serve(self.listener, self.app)
            .await
            .map_err(WebError::ServerFailed)
    }
}

/// Renders the portfolio and serves it on the configured address.
///
/// # Errors
/// - `WebError::Core` - Invalid catalog or configuration
/// - `WebError::ServerStartFailed` - Address could not be bound
/// - `WebError::ServerFailed` - Server stopped with an error
pub async fn run_server(config: ShowreelConfig) -> Result<()> {
    ShowreelServer::bind(Catalog::portfolio(), config)
        .await?
        .serve()
        .await
}

async fn index_page(State(state): State<AppState>) -> Html<String> {
    Html(state.site.index().to_string())
}

async fn asset(State(state): State<AppState>, UrlPath(file): UrlPath<String>) -> Response {
    match state.site.assets().serve(&format!("/assets/{file}")) {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Liveness report.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub tiles: usize,
    pub uptime_seconds: u64,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        tiles: state.site.tile_count(),
        uptime_seconds: state.server_started_at.elapsed().as_secs(),
    })
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        let site = RenderedSite::build(Catalog::portfolio(), ShowreelConfig::for_testing()).unwrap();
        router(AppState::new(site), Path::new("does-not-exist"))
    }

    async fn get_path(path: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_index_is_served() {
        let (status, body) = get_path("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("<!DOCTYPE html>"));
    }

    #[tokio::test]
    async fn test_player_fragment_routes() {
        let (status, body) = get_path("/fragments/player/jcrNNpMkBQ4.html").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<iframe"));

        let (status, _) = get_path("/fragments/player/dQw4w9WgXcQ.html").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = get_path("/fragments/player/jcrNNpMkBQ4").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_toggle_fragment_routes() {
        let (status, body) = get_path("/fragments/nav/open.html").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"id="mobile-nav""#));

        let (status, body) = get_path("/fragments/records/expanded.html").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Show fewer"));

        let (status, _) = get_path("/fragments/records/sideways.html").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_assets_and_health() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri(routes::STYLESHEET_PATH)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css");

        let (status, _) = get_path("/assets/missing.js").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = get_path(routes::HEALTH_PATH).await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["tiles"], 20);
    }
}
