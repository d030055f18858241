//! SQLite implementation of the mapping repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::{Mapping, MappingStats, NewMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct MappingRow {
    code: String,
    target: String,
    alias: Option<String>,
    expires_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl From<MappingRow> for Mapping {
    fn from(r: MappingRow) -> Self {
        Mapping::new(r.code, r.target, r.alias, r.expires_at, r.created_at)
    }
}

#[derive(FromRow)]
struct MappingStatsRow {
    #[sqlx(flatten)]
    mapping: MappingRow,
    total_clicks: i64,
}

/// SQLite repository for the `urls` table.
///
/// Uses bound parameters for every query.
pub struct SqliteMappingRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for SqliteMappingRepository {
    async fn find_by_target(&self, target: &str) -> Result<Option<Mapping>, AppError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT code, target, alias, expires_at, created_at
            FROM urls
            WHERE target = ?
            "#,
        )
        .bind(target)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Mapping::from))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Mapping>, AppError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT code, target, alias, expires_at, created_at
            FROM urls
            WHERE code = ?
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Mapping::from))
    }

    async fn code_exists(&self, code: &str) -> Result<bool, AppError> {
        let exists: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM urls WHERE code = ?)")
            .bind(code)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(exists != 0)
    }

    async fn alias_exists(&self, alias: &str) -> Result<bool, AppError> {
        let exists: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM urls WHERE alias = ?)")
            .bind(alias)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(exists != 0)
    }

    async fn insert(&self, new_mapping: NewMapping) -> Result<Mapping, AppError> {
        let created_at = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO urls (code, target, alias, expires_at, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&new_mapping.code)
        .bind(&new_mapping.target)
        .bind(&new_mapping.alias)
        .bind(new_mapping.expires_at)
        .bind(created_at)
        .execute(self.pool.as_ref())
        .await?;

        Ok(Mapping::new(
            new_mapping.code,
            new_mapping.target,
            new_mapping.alias,
            new_mapping.expires_at,
            created_at,
        ))
    }

    async fn update_expiration(
        &self,
        target: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), AppError> {
        sqlx::query("UPDATE urls SET expires_at = ? WHERE target = ?")
            .bind(expires_at)
            .bind(target)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM clicks WHERE code = ?")
            .bind(code)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM urls WHERE code = ?")
            .bind(code)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_with_click_counts(&self) -> Result<Vec<MappingStats>, AppError> {
        let rows = sqlx::query_as::<_, MappingStatsRow>(
            r#"
            SELECT
                u.code,
                u.target,
                u.alias,
                u.expires_at,
                u.created_at,
                COUNT(c.id) AS total_clicks
            FROM urls u
            LEFT JOIN clicks c ON c.code = u.code
            GROUP BY u.code, u.target, u.alias, u.expires_at, u.created_at
            ORDER BY u.created_at ASC, u.rowid ASC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| MappingStats {
                mapping: r.mapping.into(),
                total_clicks: r.total_clicks,
            })
            .collect())
    }
}
