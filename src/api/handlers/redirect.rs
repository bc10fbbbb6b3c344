//! Handlers for public key lookups.

use axum::{
    Json,
    extract::{Path, State},
    response::Redirect,
};
use tracing::debug;

use crate::api::dto::url::PeekResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a key to its target URL.
///
/// # Endpoint
///
/// `GET /{key}`
///
/// The click counter is incremented before the 307 Temporary Redirect is
/// returned.
///
/// # Errors
///
/// Returns 404 Not Found with `URL '<base>/<key>' doesn't exist` if no active
/// record has this key.
pub async fn redirect_handler(
    Path(key): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let record = state.url_service.redirect(&key).await?;

    debug!(key = %record.key, clicks = record.clicks, "Redirecting");

    Ok(Redirect::temporary(&record.target_url))
}

/// Returns the target URL of a key without following it.
///
/// # Endpoint
///
/// `GET /peek/{key}`
///
/// Does not count a click.
///
/// # Errors
///
/// Same as [`redirect_handler`].
pub async fn peek_handler(
    Path(key): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<PeekResponse>, AppError> {
    let record = state.url_service.peek(&key).await?;

    Ok(Json(PeekResponse {
        target_url: record.target_url,
    }))
}
