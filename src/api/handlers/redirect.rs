//! Handler for short link redirects.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{header, HeaderMap},
    response::Redirect,
};
use std::net::SocketAddr;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Lookup, expiry check, and password gate run first; the click event and
/// the counter increment then commit together before the 307 is issued, so
/// every served redirect is counted exactly once.
///
/// # Errors
///
/// - 404 unknown code
/// - 410 expired link
/// - 401 password required (submit it to `POST /{code}/verify`)
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Redirect, AppError> {
    let record = state.url_service.resolve(&code).await?;

    record_click(&state, record.id, &headers, addr).await?;

    Ok(Redirect::temporary(&record.original_url))
}

/// Records one click with best-effort client metadata.
pub(super) async fn record_click(
    state: &AppState,
    url_id: i64,
    headers: &HeaderMap,
    addr: SocketAddr,
) -> Result<(), AppError> {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let referrer = headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    state
        .stats_service
        .record_click(url_id, Some(addr.ip().to_string()), user_agent, referrer)
        .await?;

    Ok(())
}
