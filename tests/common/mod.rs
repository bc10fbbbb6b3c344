#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use keyed_shortener::application::services::UrlService;
use keyed_shortener::domain::probe::{ProbeError, ReachabilityProbe};
use keyed_shortener::domain::repositories::UrlRepository;
use keyed_shortener::infrastructure::persistence::MemoryUrlRepository;
use keyed_shortener::routes;
use keyed_shortener::state::AppState;
use keyed_shortener::utils::url_builder::UrlBuilder;
use std::sync::Arc;

pub const BASE_URL: &str = "http://localhost:8000";

/// Probe double that answers every check the same way.
pub struct StubProbe {
    reachable: bool,
}

#[async_trait]
impl ReachabilityProbe for StubProbe {
    async fn check(&self, url: &str) -> Result<(), ProbeError> {
        if self.reachable {
            Ok(())
        } else {
            Err(ProbeError::Connect(url.to_string()))
        }
    }
}

pub fn create_test_state(repository: Arc<dyn UrlRepository>, reachable: bool) -> AppState {
    let urls = UrlBuilder::new(BASE_URL).unwrap();
    let service = UrlService::new(repository, Arc::new(StubProbe { reachable }), urls);
    AppState::new(Arc::new(service))
}

/// Server over a fresh in-memory store with every target reachable.
pub fn test_server() -> TestServer {
    test_server_with(Arc::new(MemoryUrlRepository::new()), true)
}

pub fn test_server_with(repository: Arc<dyn UrlRepository>, reachable: bool) -> TestServer {
    let state = create_test_state(repository, reachable);
    TestServer::new(routes::router(state)).unwrap()
}

/// Creates a short URL and returns the response body.
pub async fn create_url(
    server: &TestServer,
    target_url: &str,
    key: Option<&str>,
) -> serde_json::Value {
    let mut body = serde_json::json!({ "target_url": target_url });
    if let Some(key) = key {
        body["key"] = serde_json::Value::String(key.to_string());
    }

    let response = server.post("/url").json(&body).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<serde_json::Value>()
}
