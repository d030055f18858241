//! Domain layer containing business entities and logic.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`analytics`] - Pure per-day click aggregation
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Orchestration lives in [`crate::application::services`].

pub mod analytics;
pub mod entities;
pub mod repositories;
