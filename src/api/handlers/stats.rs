//! Handler for link analytics.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::dto::stats::AnalyticsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns click analytics for a short link.
///
/// # Endpoint
///
/// `GET /{code}/stats`
///
/// Reports the lifetime click count, the count of clicks in the last 7
/// days, and the 10 most recent click events. Expired links stay readable
/// here; only redirects are gated by expiry.
///
/// # Errors
///
/// Returns 404 for an unknown code.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let report = state.stats_service.get_analytics(&code).await?;

    Ok(Json(report.into()))
}
