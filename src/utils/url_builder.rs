//! Construction of the public and admin links returned to clients.

use url::Url;

/// Builds `url` and `admin_url` values from the configured base URL.
///
/// The base URL's path is replaced, never appended to: with a base of
/// `https://sho.rt/app`, key `ABCDE` maps to `https://sho.rt/ABCDE`.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    base: Url,
}

impl UrlBuilder {
    /// Parses the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns [`url::ParseError`] if `base_url` is not an absolute URL.
    pub fn new(base_url: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            base: Url::parse(base_url)?,
        })
    }

    /// Public short URL for `key`.
    pub fn short_url(&self, key: &str) -> String {
        self.with_path(&format!("/{key}"))
    }

    /// Admin URL for `secret_key`.
    pub fn admin_url(&self, secret_key: &str) -> String {
        self.with_path(&format!("/admin/{secret_key}"))
    }

    /// Like [`Self::short_url`], but with `key` echoed as received.
    ///
    /// Used in error messages, which must quote what the caller sent rather
    /// than its percent-encoded form.
    pub fn echo_short_url(&self, key: &str) -> String {
        format!("{}/{key}", self.origin())
    }

    /// Like [`Self::admin_url`], with `secret_key` echoed as received.
    pub fn echo_admin_url(&self, secret_key: &str) -> String {
        format!("{}/admin/{secret_key}", self.origin())
    }

    fn origin(&self) -> String {
        self.base.origin().ascii_serialization()
    }

    fn with_path(&self, path: &str) -> String {
        let mut url = self.base.clone();
        url.set_path(path);
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_url() {
        let builder = UrlBuilder::new("http://localhost:8000").unwrap();
        assert_eq!(builder.short_url("ABCDE"), "http://localhost:8000/ABCDE");
    }

    #[test]
    fn test_admin_url() {
        let builder = UrlBuilder::new("http://localhost:8000/").unwrap();
        assert_eq!(
            builder.admin_url("ABCDE_12345678"),
            "http://localhost:8000/admin/ABCDE_12345678"
        );
    }

    #[test]
    fn test_base_path_is_replaced() {
        let builder = UrlBuilder::new("https://sho.rt/some/prefix").unwrap();
        assert_eq!(builder.short_url("K1"), "https://sho.rt/K1");
        assert_eq!(builder.admin_url("K1_X"), "https://sho.rt/admin/K1_X");
    }

    #[test]
    fn test_echo_keeps_key_verbatim() {
        let builder = UrlBuilder::new("https://sho.rt/prefix").unwrap();
        assert_eq!(builder.echo_short_url("a b"), "https://sho.rt/a b");
        assert_eq!(builder.short_url("a b"), "https://sho.rt/a%20b");
        assert_eq!(builder.echo_admin_url("a b_X"), "https://sho.rt/admin/a b_X");
    }

    #[test]
    fn test_invalid_base() {
        assert!(UrlBuilder::new("not a url").is_err());
    }
}
