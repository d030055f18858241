//! # clickshort
//!
//! A small URL shortening service with custom aliases, expiring links and
//! per-day click analytics, built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, repository traits and click aggregation
//! - **Application Layer** ([`application`]) - Allocation, resolution and analytics services
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite repositories and pool setup
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs and middleware
//!
//! ## Features
//!
//! - Random codes over a configurable alphabet, or caller-chosen aliases
//! - One code per target URL; re-shortening returns the existing code
//! - Optional expiration dates, renewable by re-shortening the same URL
//! - Every redirect is recorded and summarized per local calendar day
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://urls.db"   # Optional
//! cargo run
//!
//! curl -X POST localhost:8080/shorten \
//!   -H 'Content-Type: application/json' \
//!   -d '{"url": "https://example.com", "alias": "promo"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        Allocation, AllocationRequest, AnalyticsService, LinkService, Visitor,
    };
    pub use crate::domain::analytics::ClickSummary;
    pub use crate::domain::entities::{Mapping, NewClick, NewMapping};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::utils::code_generator::CodeGenerator;
}
