//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization; request bodies are checked with
//! `validator` before they reach a service. Click summaries serialize
//! directly from [`crate::domain::analytics::ClickSummary`].

pub mod health;
pub mod links;
pub mod shorten;
pub mod validate;
