//! PostgreSQL implementation of the URL record store.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord, UrlStats};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

const RECORD_COLUMNS: &str = "id, target_url, key, secret_key, clicks, is_active, created_at";

/// PostgreSQL repository for URL records.
///
/// The `urls_key_key` and `urls_secret_key_key` unique constraints are the
/// authoritative guard against duplicate keys; click increments and
/// deactivation are single `UPDATE ... RETURNING` statements.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(&format!(
            r#"
            INSERT INTO urls (target_url, key, secret_key)
            VALUES ($1, $2, $3)
            RETURNING {RECORD_COLUMNS}
            "#
        ))
        .bind(&new_record.target_url)
        .bind(&new_record.key)
        .bind(&new_record.secret_key)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<UrlRecord>, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(&format!(
            "SELECT {RECORD_COLUMNS} FROM urls WHERE key = $1 AND is_active"
        ))
        .bind(key)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn find_by_secret_key(&self, secret_key: &str) -> Result<Option<UrlRecord>, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(&format!(
            "SELECT {RECORD_COLUMNS} FROM urls WHERE secret_key = $1 AND is_active"
        ))
        .bind(secret_key)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn key_exists(&self, key: &str) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM urls WHERE key = $1)")
            .bind(key)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(exists)
    }

    async fn record_click(&self, id: i64) -> Result<Option<UrlRecord>, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(&format!(
            r#"
            UPDATE urls SET clicks = clicks + 1
            WHERE id = $1 AND is_active
            RETURNING {RECORD_COLUMNS}
            "#
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn deactivate_by_secret_key(
        &self,
        secret_key: &str,
    ) -> Result<Option<UrlRecord>, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(&format!(
            r#"
            UPDATE urls SET is_active = FALSE
            WHERE secret_key = $1 AND is_active
            RETURNING {RECORD_COLUMNS}
            "#
        ))
        .bind(secret_key)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn stats(&self) -> Result<UrlStats, AppError> {
        let (total, active, clicks): (i64, i64, i64) = sqlx::query_as(
            r#"
            SELECT
                COUNT(*),
                COUNT(*) FILTER (WHERE is_active),
                COALESCE(SUM(clicks), 0)::BIGINT
            FROM urls
            "#,
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(UrlStats {
            total,
            active,
            clicks,
        })
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
