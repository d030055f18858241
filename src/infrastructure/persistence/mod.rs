//! SQLite repository implementations and pool setup.
//!
//! Concrete implementations of the domain repository traits using SQLx
//! runtime queries with bound parameters.
//!
//! # Repositories
//!
//! - [`SqliteMappingRepository`] - Mapping storage, renewal and cascade delete
//! - [`SqliteClickRepository`] - Click log appends and reads

pub mod sqlite_click_repository;
pub mod sqlite_mapping_repository;

pub use sqlite_click_repository::SqliteClickRepository;
pub use sqlite_mapping_repository::SqliteMappingRepository;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

use crate::error::AppError;

/// Opens a SQLite pool, creating the database file if needed.
///
/// Foreign keys are enforced so click rows cannot outlive their mapping.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the URL is invalid or the connection fails.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Opens a private in-memory database on a single long-lived connection.
///
/// Each SQLite in-memory connection is its own database, so the pool is
/// pinned to one connection that never idles out.
pub async fn connect_in_memory() -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Applies the embedded schema migrations.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if a migration fails.
pub async fn migrate(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
