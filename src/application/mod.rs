//! Application layer services implementing business logic.
//!
//! Services consume the repository traits from [`crate::domain::repositories`]
//! and expose the operations the HTTP handlers and the admin CLI call.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Allocation, renewal, resolution, deletion
//! - [`services::click_recorder::ClickRecorder`] - Click log appends
//! - [`services::analytics_service::AnalyticsService`] - Per-day summaries and listings

pub mod services;
