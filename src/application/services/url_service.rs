//! Short URL creation, lookup and administration.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::probe::ReachabilityProbe;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::key_generator::{
    DEFAULT_KEY_LENGTH, generate_key, generate_secret_key, validate_custom_key,
};
use crate::utils::url_builder::UrlBuilder;
use crate::utils::url_validator::validate_target_url;

/// Upper bound on key draws before giving up.
const MAX_KEY_ATTEMPTS: usize = 10;

/// Service orchestrating key generation, the record store and the
/// reachability probe.
///
/// Public lookups go through the key; admin operations require the secret key.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
    probe: Arc<dyn ReachabilityProbe>,
    urls: UrlBuilder,
}

impl UrlService {
    /// Creates a new URL service.
    pub fn new(
        repository: Arc<dyn UrlRepository>,
        probe: Arc<dyn ReachabilityProbe>,
        urls: UrlBuilder,
    ) -> Self {
        Self {
            repository,
            probe,
            urls,
        }
    }

    /// Public short URL for a record.
    pub fn short_url(&self, record: &UrlRecord) -> String {
        self.urls.short_url(&record.key)
    }

    /// Admin URL for a record.
    pub fn admin_url(&self, record: &UrlRecord) -> String {
        self.urls.admin_url(&record.secret_key)
    }

    /// Creates a short URL, optionally under a caller-chosen key.
    ///
    /// An empty `key` is treated as absent.
    ///
    /// # Flow
    ///
    /// 1. Validate the target URL
    /// 2. Validate the custom key and make sure no record holds it
    /// 3. Probe the target
    /// 4. Generate a key if none was given, derive the secret key, persist
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is malformed or the key is
    /// invalid or taken, [`AppError::UnreachableTarget`] if the probe fails and
    /// [`AppError::StorageConflict`] if a concurrent request took the key first.
    pub async fn create_url(
        &self,
        target_url: String,
        key: Option<String>,
    ) -> Result<UrlRecord, AppError> {
        if let Err(e) = validate_target_url(&target_url) {
            debug!(reason = %e, "Rejected target URL");
            return Err(AppError::bad_request("Your provided URL is not valid"));
        }

        let key = key.filter(|k| !k.is_empty());

        if let Some(custom) = &key {
            validate_custom_key(custom)?;

            if self.repository.key_exists(custom).await? {
                return Err(AppError::bad_request("Key already exists in the database."));
            }
        }

        if let Err(e) = self.probe.check(&target_url).await {
            warn!(error = %e, "Target URL is unreachable");
            return Err(AppError::unreachable_target(format!(
                "URL '{target_url}' doesn't exist"
            )));
        }

        let key = match key {
            Some(custom) => custom,
            None => self.generate_unique_key(DEFAULT_KEY_LENGTH).await?,
        };
        let secret_key = generate_secret_key(&key);

        let record = self
            .repository
            .create(NewUrlRecord {
                target_url,
                key,
                secret_key,
            })
            .await?;

        info!(id = record.id, key = %record.key, "Short URL created");

        Ok(record)
    }

    /// Resolves a key for a redirect and counts the click.
    ///
    /// The click is persisted before this returns, and only once the stored
    /// target is known to be a valid redirect location.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no active record has this key and
    /// [`AppError::Internal`] if the stored target cannot be redirected to.
    pub async fn redirect(&self, key: &str) -> Result<UrlRecord, AppError> {
        let record = self.find_active(key).await?;

        if let Err(e) = validate_target_url(&record.target_url) {
            error!(id = record.id, reason = %e, "Stored target URL cannot be redirected to");
            return Err(AppError::internal("Stored target URL is not valid"));
        }

        self.repository
            .record_click(record.id)
            .await?
            .ok_or_else(|| AppError::url_not_found(self.urls.echo_short_url(key)))
    }

    /// Resolves a key without counting a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no active record has this key.
    pub async fn peek(&self, key: &str) -> Result<UrlRecord, AppError> {
        self.find_active(key).await
    }

    /// Returns the active record owning `secret_key`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no active record has this secret key.
    pub async fn admin_info(&self, secret_key: &str) -> Result<UrlRecord, AppError> {
        self.repository
            .find_by_secret_key(secret_key)
            .await?
            .ok_or_else(|| AppError::url_not_found(self.urls.echo_admin_url(secret_key)))
    }

    /// Deactivates the record owning `secret_key`.
    ///
    /// Deactivation is permanent: the key and secret key stop resolving.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no active record has this secret key.
    pub async fn delete(&self, secret_key: &str) -> Result<UrlRecord, AppError> {
        let record = self
            .repository
            .deactivate_by_secret_key(secret_key)
            .await?
            .ok_or_else(|| AppError::url_not_found(self.urls.echo_admin_url(secret_key)))?;

        info!(id = record.id, key = %record.key, "Short URL deactivated");

        Ok(record)
    }

    /// Returns true if the record store answers.
    pub async fn storage_healthy(&self) -> bool {
        self.repository.health_check().await
    }

    /// Generates a key no record holds yet.
    ///
    /// Inactive records count as holders too, since their keys stay reserved.
    /// The check-then-insert window is closed by the store's unique constraint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] after [`MAX_KEY_ATTEMPTS`] collisions.
    pub async fn generate_unique_key(&self, length: usize) -> Result<String, AppError> {
        for attempt in 1..=MAX_KEY_ATTEMPTS {
            let key = generate_key(length);

            if !self.repository.key_exists(&key).await? {
                return Ok(key);
            }

            warn!(attempt, "Generated key collided, retrying");
        }

        Err(AppError::internal("Failed to generate unique key"))
    }

    async fn find_active(&self, key: &str) -> Result<UrlRecord, AppError> {
        self.repository
            .find_by_key(key)
            .await?
            .ok_or_else(|| AppError::url_not_found(self.urls.echo_short_url(key)))
    }
}
