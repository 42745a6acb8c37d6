//! DTOs for the shorten endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::UrlRecord;

/// Request to shorten a single URL.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL (HTTP/HTTPS, at most 2048 characters).
    #[validate(url(message = "Invalid URL format"), length(min = 1, max = 2048))]
    pub url: String,

    /// Optional lifetime in days; the link answers 410 afterwards.
    #[validate(range(min = 1, max = 365))]
    pub expires_in_days: Option<i64>,

    /// Optional password gate. Stored salted-hashed, never returned.
    #[validate(length(min = 1, max = 128))]
    pub password: Option<String>,

    /// Optional owning user; `None` creates an anonymous link.
    pub owner_id: Option<i64>,
}

/// Response for a created (or idempotently returned) short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub code: String,
    pub short_url: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    pub has_password: bool,
}

impl ShortenResponse {
    pub fn from_record(record: UrlRecord, short_url: String) -> Self {
        Self {
            has_password: record.has_password(),
            code: record.short_code,
            short_url,
            original_url: record.original_url,
            created_at: record.created_at,
            expires_at: record.expires_at,
        }
    }
}
