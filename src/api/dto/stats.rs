//! DTOs for the analytics endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::AnalyticsReport;
use crate::domain::entities::Click;

/// Analytics snapshot for one short link.
#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    pub is_expired: bool,
    /// Lifetime total, maintained alongside each recorded event.
    pub click_count: i64,
    /// Events within the last 7 days, counted from stored events.
    pub recent_clicks: i64,
    /// The newest events, newest first.
    pub recent: Vec<ClickEntry>,
}

/// One click event as exposed to clients.
#[derive(Debug, Serialize)]
pub struct ClickEntry {
    pub clicked_at: DateTime<Utc>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub referrer: Option<String>,
}

impl From<Click> for ClickEntry {
    fn from(click: Click) -> Self {
        Self {
            clicked_at: click.clicked_at,
            ip_address: click.ip_address,
            user_agent: click.user_agent,
            referrer: click.referrer,
        }
    }
}

impl From<AnalyticsReport> for AnalyticsResponse {
    fn from(report: AnalyticsReport) -> Self {
        let is_expired = report.record.is_expired();
        Self {
            code: report.record.short_code,
            original_url: report.record.original_url,
            created_at: report.record.created_at,
            expires_at: report.record.expires_at,
            is_expired,
            click_count: report.record.click_count,
            recent_clicks: report.recent_count,
            recent: report.recent.into_iter().map(Into::into).collect(),
        }
    }
}
