//! Top-level router configuration.
//!
//! # Route Structure
//!
//! See [`crate::api::routes::public_routes`] for the endpoint list.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging with secret keys redacted
//! - **CORS** - Any origin, method and header
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes, state, tracing and CORS applied.
pub fn router(state: AppState) -> Router {
    api::routes::public_routes()
        .with_state(state)
        .layer(api::middleware::tracing::layer())
        .layer(CorsLayer::permissive())
}

/// Constructs the application service served by [`crate::server::run`].
///
/// Wraps [`router`] so that `/ABCDE/` and `/ABCDE` resolve alike.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
