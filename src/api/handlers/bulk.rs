//! Handler for bulk shortening.

use axum::{extract::State, Json};
use validator::Validate;

use crate::api::dto::bulk::{BulkItemError, BulkShortenRequest, BulkShortenResponse};
use crate::api::dto::shorten::ShortenResponse;
use crate::application::services::ShortenParams;
use crate::error::AppError;
use crate::state::AppState;

/// Shortens up to 100 URLs in one request.
///
/// # Endpoint
///
/// `POST /bulk-shorten`
///
/// Items are processed independently in input order; one rejected URL never
/// fails the batch. Successes land in `results`, failures in `errors` with
/// their 1-based item index, and the response always answers 200 with
/// `total_processed`, `successful`, and `failed` counts. Allocation
/// exhaustion on one item is reported there too, not as a 500.
///
/// # Errors
///
/// Returns 400 only for a structurally invalid batch (empty, over 100
/// items, or a malformed item).
pub async fn bulk_shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<BulkShortenRequest>,
) -> Result<Json<BulkShortenResponse>, AppError> {
    payload.validate()?;

    let total_processed = payload.urls.len();
    let items = payload
        .urls
        .into_iter()
        .map(|item| ShortenParams {
            url: item.url,
            expires_in_days: item.expires_in_days,
            password: item.password,
            owner_id: item.owner_id,
        })
        .collect();

    let outcomes = state.url_service.create_short_urls(items).await;

    let mut results = Vec::new();
    let mut errors = Vec::new();
    for (i, outcome) in outcomes.into_iter().enumerate() {
        match outcome {
            Ok(record) => {
                let short_url = state
                    .url_service
                    .short_url(&state.base_url, &record.short_code);
                results.push(ShortenResponse::from_record(record, short_url));
            }
            Err(e) => errors.push(BulkItemError {
                index: i + 1,
                error: e.to_string(),
            }),
        }
    }

    Ok(Json(BulkShortenResponse {
        successful: results.len(),
        failed: errors.len(),
        results,
        errors,
        total_processed,
    }))
}
