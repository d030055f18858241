//! Repository trait for short-code mappings.

use crate::domain::entities::{Mapping, MappingStats, NewMapping};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for the mapping space.
///
/// Callers are expected to serialize check-then-write sequences themselves
/// (see [`crate::application::services::LinkService`]); the unique
/// constraint on `code` is only a backstop.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteMappingRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Finds the mapping for a long URL, expired or not.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_target(&self, target: &str) -> Result<Option<Mapping>, AppError>;

    /// Finds a mapping by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Mapping>, AppError>;

    /// Returns true if `code` is already taken.
    async fn code_exists(&self, code: &str) -> Result<bool, AppError>;

    /// Returns true if `alias` was already chosen by a caller.
    async fn alias_exists(&self, alias: &str) -> Result<bool, AppError>;

    /// Inserts a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code (or target) already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_mapping: NewMapping) -> Result<Mapping, AppError>;

    /// Replaces the expiration of the mapping for `target`.
    async fn update_expiration(
        &self,
        target: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), AppError>;

    /// Deletes a mapping and every click recorded for it.
    ///
    /// Returns `Ok(false)` if no mapping had that code.
    async fn delete(&self, code: &str) -> Result<bool, AppError>;

    /// Lists every mapping with its total click count, oldest first.
    async fn list_with_click_counts(&self) -> Result<Vec<MappingStats>, AppError>;
}
