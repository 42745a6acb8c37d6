//! Handler for the shorten endpoint.

use axum::{extract::State, Json};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// Resubmitting a URL that already has an unexpired link returns the
/// existing mapping unchanged.
///
/// # Errors
///
/// Returns 400 for malformed/over-long/blacklisted/unreachable URLs or an
/// out-of-range expiry, 500 if the code space allocation budget is spent.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let record = state
        .url_service
        .create_short_url(
            payload.url,
            payload.expires_in_days,
            payload.password,
            payload.owner_id,
        )
        .await?;

    let short_url = state
        .url_service
        .short_url(&state.base_url, &record.short_code);

    Ok(Json(ShortenResponse::from_record(record, short_url)))
}
