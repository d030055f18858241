//! Repository trait definitions for the domain layer.
//!
//! These traits are the data-access contract the services rely on. They are
//! implemented in `crate::infrastructure::persistence` and mocked with
//! `mockall` in unit tests.
//!
//! - [`MappingRepository`] - Mapping lookups, inserts, renewal and deletion
//! - [`ClickRepository`] - Click log appends and reads
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod click_repository;
pub mod mapping_repository;

pub use click_repository::ClickRepository;
pub use mapping_repository::MappingRepository;

#[cfg(test)]
pub use click_repository::MockClickRepository;
#[cfg(test)]
pub use mapping_repository::MockMappingRepository;
