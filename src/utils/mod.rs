//! Utility functions for key generation and URL handling.
//!
//! - [`key_generator`] - Random key generation and custom key validation
//! - [`url_validator`] - Target URL validation
//! - [`url_builder`] - Public and admin link construction

pub mod key_generator;
pub mod url_builder;
pub mod url_validator;
