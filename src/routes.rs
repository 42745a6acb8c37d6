//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET    /`               - API information
//! - `GET    /health`         - Liveness probe
//! - `POST   /shorten`        - Create a short link
//! - `POST   /bulk-shorten`   - Create up to 100 short links at once
//! - `GET    /{code}`         - Redirect (the hot path)
//! - `DELETE /{code}`         - Delete a link and its click events
//! - `POST   /{code}/verify`  - Password gate for protected links
//! - `GET    /{code}/stats`   - Click analytics
//!
//! Static routes take priority over the `{code}` capture, so `/shorten`
//! and `/health` are never shadowed by a short code.

use axum::{
    routing::{get, post},
    Router,
};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::Level;

use crate::api::handlers::{
    bulk_shorten_handler, delete_handler, health_handler, index_handler, redirect_handler,
    shorten_handler, stats_handler, verify_password_handler,
};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/shorten", post(shorten_handler))
        .route("/bulk-shorten", post(bulk_shorten_handler))
        .route("/{code}", get(redirect_handler).delete(delete_handler))
        .route("/{code}/verify", post(verify_password_handler))
        .route("/{code}/stats", get(stats_handler))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        );

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
