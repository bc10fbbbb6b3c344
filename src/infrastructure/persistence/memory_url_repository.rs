//! In-process URL record store.
//!
//! Selected with a `memory://` storage URL. State lives for the life of the
//! process, which makes it useful for local runs and handler tests.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::entities::{NewUrlRecord, UrlRecord, UrlStats};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

#[derive(Default)]
struct Inner {
    records: Vec<UrlRecord>,
    next_id: i64,
}

/// Vector-backed repository guarded by an async `RwLock`.
///
/// Uniqueness of `key` and `secret_key` is re-checked under the write lock,
/// mirroring the unique constraints of the PostgreSQL schema.
#[derive(Default)]
pub struct MemoryUrlRepository {
    inner: RwLock<Inner>,
}

impl MemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let mut inner = self.inner.write().await;

        if inner
            .records
            .iter()
            .any(|r| r.key == new_record.key || r.secret_key == new_record.secret_key)
        {
            return Err(AppError::storage_conflict(
                "Key collision while saving the URL, please retry",
            ));
        }

        inner.next_id += 1;
        let record = UrlRecord::new(
            inner.next_id,
            new_record.target_url,
            new_record.key,
            new_record.secret_key,
            0,
            true,
            Utc::now(),
        );
        inner.records.push(record.clone());

        Ok(record)
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<UrlRecord>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner
            .records
            .iter()
            .find(|r| r.is_active && r.key == key)
            .cloned())
    }

    async fn find_by_secret_key(&self, secret_key: &str) -> Result<Option<UrlRecord>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner
            .records
            .iter()
            .find(|r| r.is_active && r.secret_key == secret_key)
            .cloned())
    }

    async fn key_exists(&self, key: &str) -> Result<bool, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.records.iter().any(|r| r.key == key))
    }

    async fn record_click(&self, id: i64) -> Result<Option<UrlRecord>, AppError> {
        let mut inner = self.inner.write().await;
        Ok(inner
            .records
            .iter_mut()
            .find(|r| r.is_active && r.id == id)
            .map(|r| {
                r.clicks += 1;
                r.clone()
            }))
    }

    async fn deactivate_by_secret_key(
        &self,
        secret_key: &str,
    ) -> Result<Option<UrlRecord>, AppError> {
        let mut inner = self.inner.write().await;
        Ok(inner
            .records
            .iter_mut()
            .find(|r| r.is_active && r.secret_key == secret_key)
            .map(|r| {
                r.is_active = false;
                r.clone()
            }))
    }

    async fn stats(&self) -> Result<UrlStats, AppError> {
        let inner = self.inner.read().await;
        Ok(UrlStats {
            total: inner.records.len() as i64,
            active: inner.records.iter().filter(|r| r.is_active).count() as i64,
            clicks: inner.records.iter().map(|r| r.clicks).sum(),
        })
    }

    async fn health_check(&self) -> bool {
        true
    }
}
