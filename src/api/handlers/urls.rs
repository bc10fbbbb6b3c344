//! Handler for the short URL creation endpoint.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::url::{CreateUrlQuery, CreateUrlRequest, UrlInfoResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// {
///   "target_url": "https://example.com",
///   "key": "ABCDE"   // optional, also accepted as `?key=`
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "url": "http://localhost:8000/ABCDE",
///   "admin_url": "http://localhost:8000/admin/ABCDE_Q8W2LM0Z",
///   "target_url": "https://example.com",
///   "key": "ABCDE",
///   "secret_key": "ABCDE_Q8W2LM0Z",
///   "clicks": 0,
///   "is_active": true
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the URL or key is invalid, or the key is taken
/// - 404 Not Found if the target URL cannot be reached
pub async fn create_url_handler(
    State(state): State<AppState>,
    Query(query): Query<CreateUrlQuery>,
    Json(payload): Json<CreateUrlRequest>,
) -> Result<(StatusCode, Json<UrlInfoResponse>), AppError> {
    payload.validate()?;

    let key = payload.key.or(query.key);
    let service = &state.url_service;

    let record = service.create_url(payload.target_url, key).await?;

    let url = service.short_url(&record);
    let admin_url = service.admin_url(&record);

    Ok((
        StatusCode::CREATED,
        Json(UrlInfoResponse::new(record, url, admin_url)),
    ))
}
