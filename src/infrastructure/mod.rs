//! Infrastructure layer for external integrations.
//!
//! Implements the traits defined by the domain layer.
//!
//! - [`persistence`] - Record store implementations (PostgreSQL, in-memory)
//! - [`probe`] - HTTP reachability probe

pub mod persistence;
pub mod probe;
