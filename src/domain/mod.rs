//! Domain layer: entities and the contracts infrastructure must fulfil.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Record store trait
//! - [`probe`] - Target reachability trait
//!
//! The domain layer has no dependency on infrastructure or presentation code.

pub mod entities;
pub mod probe;
pub mod repositories;
