//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod analytics;
pub mod health;
pub mod links;
pub mod redirect;
pub mod shorten;
pub mod validate;

pub use analytics::analytics_handler;
pub use health::health_handler;
pub use links::{delete_link_handler, link_list_handler};
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use validate::validate_handler;
