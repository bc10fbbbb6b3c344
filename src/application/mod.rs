//! Application layer services implementing business logic.
//!
//! Services consume the domain traits and give HTTP handlers and the admin
//! CLI a single entry point.
//!
//! - [`services::url_service::UrlService`] - Short URL creation, redirects and administration

pub mod services;
