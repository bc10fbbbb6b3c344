//! DTOs for short URL endpoints.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::UrlRecord;

/// Compiled regex for caller-provided keys.
static KEY_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]*$").unwrap());

/// Request body for `POST /url`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUrlRequest {
    /// The original URL to shorten.
    #[validate(length(max = 2048, message = "Your provided URL is too long"))]
    pub target_url: String,

    /// Optional key to use instead of a generated one.
    #[validate(length(max = 64, message = "Key must be 1-64 characters"))]
    #[validate(regex(
        path = "*KEY_REGEX",
        message = "Key can only contain letters, digits, hyphens and underscores"
    ))]
    pub key: Option<String>,
}

/// Query parameters for `POST /url`. A key in the body takes precedence.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUrlQuery {
    pub key: Option<String>,
}

/// Full record with derived links, returned on create and admin info.
#[derive(Debug, Serialize)]
pub struct UrlInfoResponse {
    pub url: String,
    pub admin_url: String,
    pub target_url: String,
    pub key: String,
    pub secret_key: String,
    pub clicks: i64,
    pub is_active: bool,
}

impl UrlInfoResponse {
    pub fn new(record: UrlRecord, url: String, admin_url: String) -> Self {
        Self {
            url,
            admin_url,
            target_url: record.target_url,
            key: record.key,
            secret_key: record.secret_key,
            clicks: record.clicks,
            is_active: record.is_active,
        }
    }
}

/// Response for `GET /peek/{key}`.
#[derive(Debug, Serialize)]
pub struct PeekResponse {
    pub target_url: String,
}

/// Confirmation message, e.g. after a delete.
#[derive(Debug, Serialize)]
pub struct DetailResponse {
    pub detail: String,
}
