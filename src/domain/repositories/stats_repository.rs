//! Repository trait for click analytics data access.

use crate::domain::entities::{Click, NewClick};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Storage interface for click events and their aggregates.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStatsRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Appends one click event and increments the owning record's
    /// `click_count`, both inside a single transaction.
    ///
    /// A partial outcome (event without increment or vice versa) must never
    /// be observable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn record_click(&self, new_click: NewClick) -> Result<Click, AppError>;

    /// Counts events for a record with `clicked_at >= since`.
    ///
    /// Computed by filtering stored events, not from a maintained counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_clicks_since(
        &self,
        url_id: i64,
        since: DateTime<Utc>,
    ) -> Result<i64, AppError>;

    /// Returns the most recent events for a record, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn recent_clicks(&self, url_id: i64, limit: i64) -> Result<Vec<Click>, AppError>;
}
