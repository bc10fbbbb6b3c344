//! Handler for the welcome endpoint.

use axum::Json;

pub const WELCOME_MESSAGE: &str = "Welcome to the URL shortener API :)";

/// `GET /` - static welcome string.
pub async fn root_handler() -> Json<&'static str> {
    Json(WELCOME_MESSAGE)
}
