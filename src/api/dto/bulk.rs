//! DTOs for the bulk shorten endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};

/// Request to shorten several URLs in one call.
///
/// At most 100 items. Each item carries the same fields as a single
/// shorten request and is validated and processed independently.
#[derive(Debug, Deserialize, Validate)]
pub struct BulkShortenRequest {
    #[validate(length(min = 1, max = 100), nested)]
    pub urls: Vec<ShortenRequest>,
}

/// Failure of one bulk item, positioned by its 1-based index.
#[derive(Debug, Serialize)]
pub struct BulkItemError {
    pub index: usize,
    pub error: String,
}

/// Aggregated outcome of a bulk request.
///
/// `results` holds the successful links in input order with failed items
/// skipped; `errors` accounts for the rest. `successful + failed` always
/// equals `total_processed`.
#[derive(Debug, Serialize)]
pub struct BulkShortenResponse {
    pub results: Vec<ShortenResponse>,
    pub errors: Vec<BulkItemError>,
    pub total_processed: usize,
    pub successful: usize,
    pub failed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(url: &str) -> ShortenRequest {
        ShortenRequest {
            url: url.to_string(),
            expires_in_days: None,
            password: None,
            owner_id: None,
        }
    }

    #[test]
    fn test_empty_batch_rejected() {
        let req = BulkShortenRequest { urls: vec![] };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_oversized_batch_rejected() {
        let req = BulkShortenRequest {
            urls: (0..101)
                .map(|i| item(&format!("https://example.com/{i}")))
                .collect(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_item_validation_is_nested() {
        let req = BulkShortenRequest {
            urls: vec![item("https://example.com/ok"), item("not-a-url")],
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_full_batch_accepted() {
        let req = BulkShortenRequest {
            urls: (0..100)
                .map(|i| item(&format!("https://example.com/{i}")))
                .collect(),
        };
        assert!(req.validate().is_ok());
    }
}
