//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod admin;
pub mod health;
pub mod redirect;
pub mod root;
pub mod urls;

pub use admin::{admin_info_handler, delete_url_handler};
pub use health::health_handler;
pub use redirect::{peek_handler, redirect_handler};
pub use root::root_handler;
pub use urls::create_url_handler;
