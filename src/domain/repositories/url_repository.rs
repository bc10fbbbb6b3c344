//! Repository trait for URL record data access.

use crate::domain::entities::{NewUrlRecord, UrlRecord, UrlStats};
use crate::error::AppError;
use async_trait::async_trait;

/// Record store for shortened URLs.
///
/// Lookups by key or secret key only ever see active records. Mutations are
/// single atomic statements so concurrent redirects never lose clicks.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new active record with zero clicks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageConflict`] if `key` or `secret_key` is
    /// already taken, [`AppError::Internal`] on other storage errors.
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Finds the active record with this public key.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlRecord))` if an active record matches
    /// - `Ok(None)` if nothing matches or the match is inactive
    async fn find_by_key(&self, key: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Finds the active record with this secret key.
    async fn find_by_secret_key(&self, secret_key: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Returns true if any record, active or not, holds this key.
    async fn key_exists(&self, key: &str) -> Result<bool, AppError>;

    /// Increments the click counter of an active record by one.
    ///
    /// Returns `Ok(None)` if the record is no longer active.
    async fn record_click(&self, id: i64) -> Result<Option<UrlRecord>, AppError>;

    /// Deactivates the active record with this secret key.
    ///
    /// Returns the now-inactive record, or `Ok(None)` if no active record matched.
    async fn deactivate_by_secret_key(
        &self,
        secret_key: &str,
    ) -> Result<Option<UrlRecord>, AppError>;

    /// Counts records and clicks.
    async fn stats(&self) -> Result<UrlStats, AppError>;

    /// Returns true if the store is reachable.
    async fn health_check(&self) -> bool;
}
