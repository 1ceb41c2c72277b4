//! HTTP API
//!
//! Per-resource routers merged into one application, middleware stacked
//! in [`build_app`].

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::{Config, ServerState};
use crate::utils::AppError;

pub mod auth;
pub mod health;
pub mod movies;

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router(state: &ServerState) -> Router<ServerState> {
    Router::new()
        // Catalog API - reads public, mutations admin-gated
        .merge(movies::router(state))
        // Auth API - register/login public, /me authenticated
        .merge(auth::router())
        // Health API - public route
        .merge(health::router())
}

/// Build the fully configured application with middleware and state
pub fn build_app(state: ServerState) -> Router {
    let cors = cors_layer(&state.config);

    build_router(&state)
        // Unmatched routes get the JSON 404 body, not axum's default
        .fallback(not_found)
        // Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // CORS - outermost so preflight is answered before anything else
        .layer(cors)
        .with_state(state)
}

/// CORS for the single configured client origin, with credentials
fn cors_layer(config: &Config) -> CorsLayer {
    let origin = config
        .client_origin
        .parse::<HeaderValue>()
        .unwrap_or_else(|_| {
            tracing::warn!(
                origin = %config.client_origin,
                "CLIENT_ORIGIN is not a valid header value, falling back to default"
            );
            HeaderValue::from_static("http://localhost:5173")
        });

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

/// Fallback for unmatched routes
async fn not_found() -> AppError {
    AppError::not_found("Route not found")
}
