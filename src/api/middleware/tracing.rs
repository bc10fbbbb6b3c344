//! HTTP request/response tracing middleware.

use std::borrow::Cow;

use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span};

/// Builds request spans with the secret key removed from admin paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct RedactedMakeSpan;

impl<B> MakeSpan<B> for RedactedMakeSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        tracing::info_span!(
            "request",
            method = %request.method(),
            path = %redact_path(request.uri().path()),
            version = ?request.version(),
        )
    }
}

/// Replaces the secret key segment of `/admin/{secret_key}` paths.
pub fn redact_path(path: &str) -> Cow<'_, str> {
    match path.strip_prefix("/admin/") {
        Some(rest) if !rest.is_empty() => Cow::Borrowed("/admin/<redacted>"),
        _ => Cow::Borrowed(path),
    }
}

/// Creates a tracing middleware for HTTP requests.
///
/// # Logging Behavior
///
/// - A span at `INFO` level per request with method, redacted path and HTTP version
/// - A response event at `INFO` level with status and latency in milliseconds
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET path=/admin/<redacted> version=HTTP/1.1}: finished processing request latency=3 ms status=200
/// ```
pub fn layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    RedactedMakeSpan,
    DefaultOnRequest,
    DefaultOnResponse,
> {
    TraceLayer::new_for_http()
        .make_span_with(RedactedMakeSpan)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
