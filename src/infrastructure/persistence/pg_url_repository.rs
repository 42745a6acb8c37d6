//! PostgreSQL implementation of the URL record repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

const RECORD_COLUMNS: &str =
    "id, original_url, short_code, created_at, expires_at, click_count, password_hash, owner_id";

/// Row shape for the `urls` table.
#[derive(sqlx::FromRow)]
struct UrlRow {
    id: i64,
    original_url: String,
    short_code: String,
    created_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
    click_count: i64,
    password_hash: Option<String>,
    owner_id: Option<i64>,
}

impl From<UrlRow> for UrlRecord {
    fn from(row: UrlRow) -> Self {
        UrlRecord {
            id: row.id,
            original_url: row.original_url,
            short_code: row.short_code,
            created_at: row.created_at,
            expires_at: row.expires_at,
            click_count: row.click_count,
            password_hash: row.password_hash,
            owner_id: row.owner_id,
        }
    }
}

/// PostgreSQL repository for URL records.
///
/// The unique index on `short_code` is the authoritative uniqueness
/// guarantee; insert races surface as [`AppError::Conflict`].
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let query = format!(
            "INSERT INTO urls (original_url, short_code, expires_at, password_hash, owner_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {RECORD_COLUMNS}"
        );

        let row = sqlx::query_as::<_, UrlRow>(&query)
            .bind(&new_record.original_url)
            .bind(&new_record.short_code)
            .bind(new_record.expires_at)
            .bind(&new_record.password_hash)
            .bind(new_record.owner_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError> {
        let query = format!("SELECT {RECORD_COLUMNS} FROM urls WHERE short_code = $1");

        let row = sqlx::query_as::<_, UrlRow>(&query)
            .bind(code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError> {
        // Newest first: an expired older mapping must not shadow a live one.
        let query = format!(
            "SELECT {RECORD_COLUMNS} FROM urls
             WHERE original_url = $1
             ORDER BY created_at DESC
             LIMIT 1"
        );

        let row = sqlx::query_as::<_, UrlRow>(&query)
            .bind(original_url)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, code: &str, owner_id: Option<i64>) -> Result<bool, AppError> {
        // IS NOT DISTINCT FROM matches NULL owners for anonymous records.
        let result = sqlx::query(
            "DELETE FROM urls WHERE short_code = $1 AND owner_id IS NOT DISTINCT FROM $2",
        )
        .bind(code)
        .bind(owner_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
