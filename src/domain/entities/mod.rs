//! Core domain entities.
//!
//! - [`Mapping`] - A short code bound to a long URL
//! - [`NewClick`] - A redirect event on a mapping
//!
//! Separate `New*` structs carry the data needed to create a record.

pub mod click;
pub mod mapping;

pub use click::NewClick;
pub use mapping::{DAY_FORMAT, Mapping, MappingStats, NewMapping, parse_expiration};
