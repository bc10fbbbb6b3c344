//! Handlers for secret-key administration endpoints.
//!
//! Possession of the secret key is the only authorization.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::url::{DetailResponse, UrlInfoResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the full record behind a secret key.
///
/// # Endpoint
///
/// `GET /admin/{secret_key}`
///
/// # Errors
///
/// Returns 404 Not Found if no active record has this secret key.
pub async fn admin_info_handler(
    Path(secret_key): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UrlInfoResponse>, AppError> {
    let service = &state.url_service;
    let record = service.admin_info(&secret_key).await?;

    let url = service.short_url(&record);
    let admin_url = service.admin_url(&record);

    Ok(Json(UrlInfoResponse::new(record, url, admin_url)))
}

/// Deactivates the record behind a secret key.
///
/// # Endpoint
///
/// `DELETE /admin/{secret_key}`
///
/// # Behavior
///
/// The record is kept but stops resolving through both its key and its
/// secret key. There is no way to restore it.
///
/// # Response
///
/// ```json
/// { "detail": "Successfully deleted shortened URL for https://example.com" }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if no active record has this secret key, including
/// a second delete of the same record.
pub async fn delete_url_handler(
    Path(secret_key): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DetailResponse>, AppError> {
    let record = state.url_service.delete(&secret_key).await?;

    Ok(Json(DetailResponse {
        detail: format!(
            "Successfully deleted shortened URL for {}",
            record.target_url
        ),
    }))
}
