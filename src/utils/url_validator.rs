//! Target URL validation.
//!
//! A target is accepted only if it parses as an absolute `http`/`https` URL
//! with a host and contains no control characters. The stored target is the
//! caller's string, unchanged, so it must already be fit for a `Location`
//! header.

use url::Url;

/// Reasons a target URL is rejected.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Checks that `input` is a syntactically valid http(s) URL.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for malformed input, input
/// with surrounding whitespace or embedded control characters,
/// [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes and
/// [`UrlValidationError::MissingHost`] when the URL has no host.
pub fn validate_target_url(input: &str) -> Result<Url, UrlValidationError> {
    if input.trim() != input {
        return Err(UrlValidationError::InvalidFormat(
            "leading or trailing whitespace".to_string(),
        ));
    }

    // `Url::parse` silently drops tabs and newlines, the raw string keeps them.
    if input.chars().any(char::is_control) {
        return Err(UrlValidationError::InvalidFormat("control characters".to_string()));
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(UrlValidationError::MissingHost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_embedded_control_characters() {
        for input in [
            "https://example.com/a\nb",
            "https://example.com/a\rb",
            "https://exa\tmple.com",
            "https://example.com/\u{7f}",
        ] {
            assert!(matches!(
                validate_target_url(input),
                Err(UrlValidationError::InvalidFormat(_))
            ));
        }
    }

    #[test]
    fn test_accepts_simple_https() {
        let url = validate_target_url("https://example.com").unwrap();
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn test_accepts_http_with_port_query_and_fragment() {
        assert!(validate_target_url("http://example.com:8080/a/b?q=rust#top").is_ok());
    }

    #[test]
    fn test_accepts_ip_and_localhost() {
        assert!(validate_target_url("http://192.168.1.1:8080/api").is_ok());
        assert!(validate_target_url("http://localhost:3000/test").is_ok());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            validate_target_url("not a valid url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_missing_scheme() {
        assert!(matches!(
            validate_target_url("example.com"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            validate_target_url(""),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_surrounding_whitespace() {
        assert!(matches!(
            validate_target_url(" https://example.com"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_other_protocols() {
        for input in [
            "ftp://example.com/file.txt",
            "file:///home/user/document.txt",
            "javascript:alert('xss')",
            "mailto:test@example.com",
            "data:text/plain,Hello",
        ] {
            assert!(
                matches!(
                    validate_target_url(input),
                    Err(UrlValidationError::UnsupportedProtocol)
                ),
                "{input} should be rejected"
            );
        }
    }
}
