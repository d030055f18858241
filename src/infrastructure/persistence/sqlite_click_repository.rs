//! SQLite implementation of the click repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::NewClick;
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// SQLite repository for the append-only `clicks` table.
pub struct SqliteClickRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for SqliteClickRepository {
    async fn insert_click(&self, new_click: NewClick) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO clicks (code, occurred_at, source_address, client_agent)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&new_click.code)
        .bind(new_click.occurred_at)
        .bind(&new_click.source_address)
        .bind(&new_click.client_agent)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn list_clicks_by_code(&self, code: &str) -> Result<Vec<DateTime<Utc>>, AppError> {
        let rows: Vec<DateTime<Utc>> =
            sqlx::query_scalar("SELECT occurred_at FROM clicks WHERE code = ? ORDER BY id")
                .bind(code)
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(rows)
    }
}
