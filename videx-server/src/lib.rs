//! # Videx Server
//!
//! Browsable HTML index of conference videos plus a small read-only JSON API.
//!
//! - HTML pages for categories, speakers and videos, rendered with Askama
//! - Full-text search, OpenSearch description and autocomplete suggestions
//! - `/api/v1` JSON endpoints and a `/health` probe
//!
//! The router is assembled by [`create_app`]; `main.rs` only wires
//! configuration, storage and the listener around it.

pub mod handlers;
pub mod infra;
pub mod routes;
pub mod views;

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::get,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use videx_core::api::routes::HEALTH;

pub use infra::app_state::AppState;

/// Build the complete application router.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route(HEALTH, get(handlers::health::health_handler))
        .merge(routes::site::create_site_router())
        .merge(routes::create_api_router(state.clone()))
        .layer(cors_layer(&state))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Permissive in dev mode, allow-list otherwise. The API is read-only, so
/// only safe methods are exposed.
fn cors_layer(state: &AppState) -> CorsLayer {
    let cors = &state.config().cors;
    if state.config().dev_mode {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter(|origin| origin.trim() != "*")
        .filter_map(|origin| HeaderValue::from_str(origin.trim()).ok())
        .collect();
    let allow_origin = if origins.is_empty() || cors.is_wildcard_included() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{body::Body, http::Request};
    use tower::ServiceExt;
    use videx_config::Config;
    use videx_core::{CatalogStore, search::TantivySearchIndex};

    use super::*;

    fn app(config: Config) -> Router {
        create_app(AppState::new(
            CatalogStore::in_memory(),
            Arc::new(TantivySearchIndex::in_memory().expect("in-memory index")),
            Arc::new(config),
        ))
    }

    async fn allowed_origin(app: Router, origin: &str) -> Option<String> {
        let request = Request::get(HEALTH)
            .header("origin", origin)
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    }

    #[tokio::test]
    async fn production_cors_echoes_listed_origins_only() {
        let mut config = Config::default();
        config.cors.allowed_origins = vec!["https://pyvideo.test".into()];

        assert_eq!(
            allowed_origin(app(config.clone()), "https://pyvideo.test").await.as_deref(),
            Some("https://pyvideo.test")
        );
        assert_eq!(allowed_origin(app(config), "https://elsewhere.test").await, None);
    }

    #[tokio::test]
    async fn dev_mode_allows_any_origin() {
        let config = Config {
            dev_mode: true,
            ..Config::default()
        };
        assert!(allowed_origin(app(config), "http://localhost:3000").await.is_some());
    }
}
