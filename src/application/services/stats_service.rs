//! Click recording and analytics queries.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde_json::json;

use crate::domain::entities::{Click, NewClick, UrlRecord};
use crate::domain::repositories::{StatsRepository, UrlRepository};
use crate::error::AppError;

/// Window for the "recent clicks" aggregate: the last 7×24 hours.
const RECENT_WINDOW_DAYS: i64 = 7;

/// How many individual click rows the analytics report includes.
const RECENT_SAMPLE_SIZE: i64 = 10;

/// Analytics snapshot for one short link.
#[derive(Debug, Clone)]
pub struct AnalyticsReport {
    pub record: UrlRecord,
    /// Events inside the 7-day window, counted from stored events.
    pub recent_count: i64,
    /// The newest events, newest first, capped at [`RECENT_SAMPLE_SIZE`].
    pub recent: Vec<Click>,
}

/// Service recording clicks and answering analytics queries.
///
/// Recording is synchronous on the redirect path: the event insert and the
/// counter increment commit together, so `click_count` always equals the
/// number of stored events for a record.
pub struct StatsService<U: UrlRepository, S: StatsRepository> {
    url_repository: Arc<U>,
    stats_repository: Arc<S>,
}

impl<U: UrlRepository, S: StatsRepository> StatsService<U, S> {
    /// Creates a new statistics service.
    pub fn new(url_repository: Arc<U>, stats_repository: Arc<S>) -> Self {
        Self {
            url_repository,
            stats_repository,
        }
    }

    /// Records one click: event append plus click-count increment, atomically.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors; on failure neither
    /// the event nor the increment is persisted.
    pub async fn record_click(
        &self,
        url_id: i64,
        ip_address: Option<String>,
        user_agent: Option<String>,
        referrer: Option<String>,
    ) -> Result<Click, AppError> {
        let new_click = NewClick {
            url_id,
            ip_address,
            user_agent,
            referrer,
        };

        self.stats_repository.record_click(new_click).await
    }

    /// Builds the analytics report for a code.
    ///
    /// Works for expired links too; expiry only gates redirects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown code.
    pub async fn get_analytics(&self, code: &str) -> Result<AnalyticsReport, AppError> {
        let record = self
            .url_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))?;

        let since = recent_window_start(Utc::now());
        let recent_count = self
            .stats_repository
            .count_clicks_since(record.id, since)
            .await?;

        let recent = self
            .stats_repository
            .recent_clicks(record.id, RECENT_SAMPLE_SIZE)
            .await?;

        Ok(AnalyticsReport {
            record,
            recent_count,
            recent,
        })
    }
}

/// Inclusive lower bound of the recent window: exactly 7×24h before `now`.
fn recent_window_start(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::days(RECENT_WINDOW_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockStatsRepository, MockUrlRepository};

    fn test_record(code: &str) -> UrlRecord {
        UrlRecord {
            id: 10,
            original_url: "https://example.com/page".to_string(),
            short_code: code.to_string(),
            created_at: Utc::now(),
            expires_at: None,
            click_count: 5,
            password_hash: None,
            owner_id: None,
        }
    }

    fn test_click(id: i64) -> Click {
        Click {
            id,
            url_id: 10,
            clicked_at: Utc::now(),
            ip_address: Some("192.168.1.1".to_string()),
            user_agent: Some("Mozilla/5.0".to_string()),
            referrer: None,
        }
    }

    #[test]
    fn test_recent_window_is_seven_days() {
        let now = Utc::now();
        assert_eq!(now - recent_window_start(now), Duration::days(7));
    }

    #[tokio::test]
    async fn test_record_click_passes_metadata_through() {
        let url_repo = MockUrlRepository::new();
        let mut stats_repo = MockStatsRepository::new();

        stats_repo
            .expect_record_click()
            .withf(|c| {
                c.url_id == 10
                    && c.ip_address.as_deref() == Some("192.168.1.1")
                    && c.user_agent.as_deref() == Some("Mozilla/5.0")
                    && c.referrer.is_none()
            })
            .times(1)
            .returning(|_| Ok(test_click(1)));

        let service = StatsService::new(Arc::new(url_repo), Arc::new(stats_repo));

        let click = service
            .record_click(
                10,
                Some("192.168.1.1".to_string()),
                Some("Mozilla/5.0".to_string()),
                None,
            )
            .await
            .unwrap();

        assert_eq!(click.url_id, 10);
    }

    #[tokio::test]
    async fn test_get_analytics_unknown_code() {
        let mut url_repo = MockUrlRepository::new();
        url_repo.expect_find_by_code().returning(|_| Ok(None));

        let service = StatsService::new(Arc::new(url_repo), Arc::new(MockStatsRepository::new()));

        let err = service.get_analytics("nope42").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_analytics_queries_seven_day_window() {
        let mut url_repo = MockUrlRepository::new();
        let record = test_record("aZ3kT9");
        url_repo
            .expect_find_by_code()
            .returning(move |_| Ok(Some(record.clone())));

        let mut stats_repo = MockStatsRepository::new();
        stats_repo
            .expect_count_clicks_since()
            .withf(|url_id, since| {
                let expected = Utc::now() - Duration::days(7);
                *url_id == 10 && (*since - expected).num_seconds().abs() < 5
            })
            .times(1)
            .returning(|_, _| Ok(3));
        stats_repo
            .expect_recent_clicks()
            .withf(|url_id, limit| *url_id == 10 && *limit == 10)
            .times(1)
            .returning(|_, _| Ok(vec![test_click(1), test_click(2)]));

        let service = StatsService::new(Arc::new(url_repo), Arc::new(stats_repo));

        let report = service.get_analytics("aZ3kT9").await.unwrap();
        assert_eq!(report.record.click_count, 5);
        assert_eq!(report.recent_count, 3);
        assert_eq!(report.recent.len(), 2);
    }

    #[tokio::test]
    async fn test_get_analytics_works_for_expired_links() {
        let mut url_repo = MockUrlRepository::new();
        let record = UrlRecord {
            expires_at: Some(Utc::now() - Duration::hours(1)),
            ..test_record("old123")
        };
        url_repo
            .expect_find_by_code()
            .returning(move |_| Ok(Some(record.clone())));

        let mut stats_repo = MockStatsRepository::new();
        stats_repo
            .expect_count_clicks_since()
            .returning(|_, _| Ok(0));
        stats_repo.expect_recent_clicks().returning(|_, _| Ok(vec![]));

        let service = StatsService::new(Arc::new(url_repo), Arc::new(stats_repo));

        let report = service.get_analytics("old123").await.unwrap();
        assert!(report.record.is_expired());
    }
}
