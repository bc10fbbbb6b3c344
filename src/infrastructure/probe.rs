//! Reachability probe implementations.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::probe::{ProbeError, ReachabilityProbe};

/// Probes a target with a plain GET request bounded by a timeout.
pub struct HttpProbe {
    client: reqwest::Client,
}

impl HttpProbe {
    /// Builds the probe's HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`reqwest::Error`] if the TLS backend cannot be initialised.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ReachabilityProbe for HttpProbe {
    async fn check(&self, url: &str) -> Result<(), ProbeError> {
        match self.client.get(url).send().await {
            Ok(response) => {
                debug!(status = %response.status(), "Probe got a response");
                Ok(())
            }
            Err(e) if e.is_timeout() => Err(ProbeError::Timeout(url.to_string())),
            Err(e) if e.is_connect() => Err(ProbeError::Connect(url.to_string())),
            Err(e) => Err(ProbeError::Request {
                url: url.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}

/// Probe that treats every target as reachable. Used when probing is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProbe;

#[async_trait]
impl ReachabilityProbe for NoopProbe {
    async fn check(&self, _url: &str) -> Result<(), ProbeError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, http::StatusCode, routing::get};

    async fn spawn_server(status: StatusCode) -> String {
        let app = Router::new().route("/", get(move || async move { status }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/")
    }

    #[tokio::test]
    async fn test_any_response_is_reachable() {
        let probe = HttpProbe::new(Duration::from_secs(5)).unwrap();

        let ok = spawn_server(StatusCode::OK).await;
        assert!(probe.check(&ok).await.is_ok());

        let broken = spawn_server(StatusCode::INTERNAL_SERVER_ERROR).await;
        assert!(probe.check(&broken).await.is_ok());
    }

    #[tokio::test]
    async fn test_refused_connection_is_unreachable() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let probe = HttpProbe::new(Duration::from_secs(5)).unwrap();
        let result = probe.check(&format!("http://{addr}/")).await;

        assert!(matches!(result, Err(ProbeError::Connect(_))));
    }

    #[tokio::test]
    async fn test_noop_probe() {
        assert!(NoopProbe.check("http://unreachable.invalid").await.is_ok());
    }
}
