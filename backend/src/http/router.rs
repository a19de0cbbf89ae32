//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing,
//! response hardening headers, panic recovery) and creates the axum router
//! ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracing::warn;

use super::error::handle_panic;
use super::handlers;
use super::state::AppState;
use crate::config::ServerConfig;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let config = state.config.clone();

    Router::new()
        .route("/", get(handlers::root))
        .route(&config.route("/health"), get(handlers::health_check))
        .route(&config.route("/check"), post(handlers::check_parity))
        .route(&config.route("/check-query"), get(handlers::check_parity_query))
        .route(&config.route("/history"), get(handlers::get_history))
        .route(&config.route("/stats"), get(handlers::get_stats))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_XSS_PROTECTION,
            HeaderValue::from_static("1; mode=block"),
        ))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config))
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.allows_any_origin() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_local_repository;

    #[test]
    fn test_router_creation() {
        let state = AppState::new(create_local_repository(), ServerConfig::default());
        let _router = create_router(state);
    }

    #[test]
    fn test_router_with_prefix_and_origins() {
        let config = ServerConfig {
            api_prefix: "/api".to_string(),
            cors_origins: vec!["https://localhost:3000".to_string()],
            ..Default::default()
        };
        let _router = create_router(AppState::new(create_local_repository(), config));
    }
}
