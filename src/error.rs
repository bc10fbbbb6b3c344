//! Application error type and its HTTP mapping.
//!
//! Every handler returns `Result<_, AppError>`; the conversion into a response
//! happens here, at the handler boundary.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON body returned for every error status.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
    pub code: &'static str,
}

/// Errors surfaced by services and handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed target URL, invalid custom key or key already in use.
    #[error("{message}")]
    Validation { message: String },

    /// The reachability probe could not reach the target URL.
    #[error("{message}")]
    UnreachableTarget { message: String },

    /// No active record matches the requested key or secret key.
    #[error("{message}")]
    NotFound { message: String },

    /// A unique constraint rejected the write. The request may be retried.
    #[error("{message}")]
    StorageConflict { message: String },

    /// Storage failure or any other unexpected condition.
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn unreachable_target(message: impl Into<String>) -> Self {
        Self::UnreachableTarget {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn storage_conflict(message: impl Into<String>) -> Self {
        Self::StorageConflict {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Builds the `URL '<url>' doesn't exist` error used by every lookup path.
    pub fn url_not_found(url: impl std::fmt::Display) -> Self {
        Self::not_found(format!("URL '{url}' doesn't exist"))
    }

    /// Machine-readable code included in the error body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::UnreachableTarget { .. } => "unreachable_target",
            AppError::NotFound { .. } => "not_found",
            AppError::StorageConflict { .. } => "storage_conflict",
            AppError::Internal { .. } => "internal_error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::UnreachableTarget { .. } | AppError::NotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            AppError::StorageConflict { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            code: self.code(),
            detail: self.to_string(),
        };

        let mut response = (status, Json(body)).into_response();
        if matches!(self, AppError::StorageConflict { .. }) {
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from_static("1"));
        }
        response
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            tracing::warn!(constraint = ?db.constraint(), "Unique constraint violation");
            return AppError::storage_conflict("Key collision while saving the URL, please retry");
        }

        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error")
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("Invalid value for '{field}'"),
                })
            })
            .next()
            .unwrap_or_else(|| "Invalid request".to_string());

        AppError::bad_request(message)
    }
}
