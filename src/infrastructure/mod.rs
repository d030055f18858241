//! Infrastructure layer for external integrations.
//!
//! Implements the repository traits defined by the domain layer.
//!
//! - [`persistence`] - SQLite repository implementations
//! - [`reachability`] - Outbound `GET` check used by the validate endpoint

pub mod persistence;
pub mod reachability;
