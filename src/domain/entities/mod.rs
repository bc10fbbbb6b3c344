//! Core domain entities.
//!
//! - [`UrlRecord`] - A stored key-to-target mapping
//! - [`NewUrlRecord`] - Input for creating a record
//! - [`UrlStats`] - Aggregate counters over all records

pub mod url_record;

pub use url_record::{NewUrlRecord, UrlRecord, UrlStats};
