//! PostgreSQL implementation of the click analytics repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::StatsRepository;
use crate::error::AppError;

const CLICK_COLUMNS: &str = "id, url_id, clicked_at, ip_address, user_agent, referrer";

/// Row shape for the `click_events` table.
#[derive(sqlx::FromRow)]
struct ClickRow {
    id: i64,
    url_id: i64,
    clicked_at: DateTime<Utc>,
    ip_address: Option<String>,
    user_agent: Option<String>,
    referrer: Option<String>,
}

impl From<ClickRow> for Click {
    fn from(row: ClickRow) -> Self {
        Click {
            id: row.id,
            url_id: row.url_id,
            clicked_at: row.clicked_at,
            ip_address: row.ip_address,
            user_agent: row.user_agent,
            referrer: row.referrer,
        }
    }
}

/// PostgreSQL repository for click events.
pub struct PgStatsRepository {
    pool: Arc<PgPool>,
}

impl PgStatsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatsRepository for PgStatsRepository {
    async fn record_click(&self, new_click: NewClick) -> Result<Click, AppError> {
        // Event append and counter increment commit or roll back together;
        // click_count must always equal the number of stored events.
        let mut tx = self.pool.begin().await?;

        let query = format!(
            "INSERT INTO click_events (url_id, ip_address, user_agent, referrer)
             VALUES ($1, $2, $3, $4)
             RETURNING {CLICK_COLUMNS}"
        );

        let row = sqlx::query_as::<_, ClickRow>(&query)
            .bind(new_click.url_id)
            .bind(&new_click.ip_address)
            .bind(&new_click.user_agent)
            .bind(&new_click.referrer)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("UPDATE urls SET click_count = click_count + 1 WHERE id = $1")
            .bind(new_click.url_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(row.into())
    }

    async fn count_clicks_since(
        &self,
        url_id: i64,
        since: DateTime<Utc>,
    ) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM click_events WHERE url_id = $1 AND clicked_at >= $2",
        )
        .bind(url_id)
        .bind(since)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn recent_clicks(&self, url_id: i64, limit: i64) -> Result<Vec<Click>, AppError> {
        let query = format!(
            "SELECT {CLICK_COLUMNS} FROM click_events
             WHERE url_id = $1
             ORDER BY clicked_at DESC
             LIMIT $2"
        );

        let rows = sqlx::query_as::<_, ClickRow>(&query)
            .bind(url_id)
            .bind(limit)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
