//! Business logic services for the application layer.

pub mod analytics_service;
pub mod click_recorder;
pub mod link_service;

pub use analytics_service::AnalyticsService;
pub use click_recorder::ClickRecorder;
pub use link_service::{Allocation, AllocationRequest, LinkService, Visitor};
