//! URL record entity: a key-to-target mapping with its admin secret.

use chrono::{DateTime, Utc};

/// A shortened URL and its lifecycle state.
///
/// `is_active` goes from `true` to `false` once, on deletion; records are
/// never physically removed.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct UrlRecord {
    pub id: i64,
    pub target_url: String,
    pub key: String,
    pub secret_key: String,
    pub clicks: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(
        id: i64,
        target_url: String,
        key: String,
        secret_key: String,
        clicks: i64,
        is_active: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            target_url,
            key,
            secret_key,
            clicks,
            is_active,
            created_at,
        }
    }
}

/// Input data for inserting a record. Stores start it active with zero clicks.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUrlRecord {
    pub target_url: String,
    pub key: String,
    pub secret_key: String,
}

/// Aggregate counters reported by the admin CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrlStats {
    pub total: i64,
    pub active: i64,
    pub clicks: i64,
}
