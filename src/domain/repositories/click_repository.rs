//! Repository trait for the click log.

use crate::domain::entities::NewClick;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Append-only store of click events.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteClickRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends one click event. No deduplication is performed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including a
    /// reference to a code that no longer exists.
    async fn insert_click(&self, new_click: NewClick) -> Result<(), AppError>;

    /// Returns the UTC timestamps of every click on `code` in insertion order.
    async fn list_clicks_by_code(&self, code: &str) -> Result<Vec<DateTime<Utc>>, AppError>;
}
