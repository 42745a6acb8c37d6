//! Handler for password verification on protected links.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::HeaderMap,
    response::Redirect,
    Json,
};
use std::net::SocketAddr;
use validator::Validate;

use crate::api::dto::verify::VerifyPasswordRequest;
use crate::api::handlers::redirect::record_click;
use crate::error::AppError;
use crate::state::AppState;

/// Verifies a password for a protected link and redirects on success.
///
/// # Endpoint
///
/// `POST /{code}/verify`
///
/// Reached after `GET /{code}` answered 401 password-required. A correct
/// password commits the click (event plus counter, atomically) and issues
/// the same 307 as an unprotected redirect.
///
/// # Errors
///
/// - 401 wrong password
/// - 404 unknown code
/// - 410 expired link
pub async fn verify_password_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(payload): Json<VerifyPasswordRequest>,
) -> Result<Redirect, AppError> {
    payload.validate()?;

    let record = state
        .url_service
        .verify_password(&code, &payload.password)
        .await?;

    record_click(&state, record.id, &headers, addr).await?;

    Ok(Redirect::temporary(&record.original_url))
}
