//! API route configuration.
//!
//! No endpoint requires authentication; admin endpoints are guarded by
//! possession of the secret key in the path.

use crate::api::handlers::{
    admin_info_handler, create_url_handler, delete_url_handler, health_handler, peek_handler,
    redirect_handler, root_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public routes.
///
/// # Endpoints
///
/// - `GET    /`                     - Welcome message
/// - `GET    /health`               - Record store health
/// - `POST   /url`                  - Create a short URL
/// - `GET    /peek/{key}`           - Show the target of a key
/// - `GET    /admin/{secret_key}`   - Record info
/// - `DELETE /admin/{secret_key}`   - Deactivate a record
/// - `GET    /{key}`                - Redirect to the target
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/url", post(create_url_handler))
        .route("/peek/{key}", get(peek_handler))
        .route(
            "/admin/{secret_key}",
            get(admin_info_handler).delete(delete_url_handler),
        )
        .route("/{key}", get(redirect_handler))
}
