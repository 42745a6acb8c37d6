//! Click event entity for redirect analytics.

use chrono::{DateTime, Utc};

/// One recorded redirect of a short link.
///
/// Events are written exactly once per successful redirect, never mutated,
/// and removed only when their owning URL record is deleted (cascade).
/// Client metadata is best effort; missing headers leave fields empty.
#[derive(Debug, Clone)]
pub struct Click {
    pub id: i64,
    pub url_id: i64,
    pub clicked_at: DateTime<Utc>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub referrer: Option<String>,
}

/// Input data for recording a click.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub url_id: i64,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub referrer: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_metadata_is_optional() {
        let click = Click {
            id: 1,
            url_id: 10,
            clicked_at: Utc::now(),
            ip_address: None,
            user_agent: None,
            referrer: None,
        };

        assert_eq!(click.url_id, 10);
        assert!(click.ip_address.is_none());
        assert!(click.user_agent.is_none());
        assert!(click.referrer.is_none());
    }

    #[test]
    fn test_new_click_carries_metadata() {
        let new_click = NewClick {
            url_id: 3,
            ip_address: Some("192.168.1.1".to_string()),
            user_agent: Some("Mozilla/5.0".to_string()),
            referrer: Some("https://google.com".to_string()),
        };

        assert_eq!(new_click.ip_address.as_deref(), Some("192.168.1.1"));
        assert_eq!(new_click.user_agent.as_deref(), Some("Mozilla/5.0"));
    }
}
