//! Reachability check performed against a target URL before it is shortened.

use async_trait::async_trait;

/// Why a target could not be reached.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("connection to {0} failed")]
    Connect(String),

    #[error("request to {0} timed out")]
    Timeout(String),

    #[error("request to {url} failed: {reason}")]
    Request { url: String, reason: String },
}

/// Checks whether a target URL answers at all.
///
/// Any HTTP response counts as reachable, whatever its status code.
///
/// # Implementations
///
/// - [`crate::infrastructure::probe::HttpProbe`] - GET with timeout
/// - [`crate::infrastructure::probe::NoopProbe`] - Always reachable
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReachabilityProbe: Send + Sync {
    async fn check(&self, url: &str) -> Result<(), ProbeError>;
}
