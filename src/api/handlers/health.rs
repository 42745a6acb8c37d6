//! Service metadata and health endpoints.

use axum::Json;
use serde_json::{json, Value};

/// API information for the root path.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> Json<Value> {
    Json(json!({
        "message": "URL Shortener API",
        "endpoints": {
            "/shorten": "POST",
            "/bulk-shorten": "POST",
            "/{code}": "GET | DELETE",
            "/{code}/verify": "POST",
            "/{code}/stats": "GET",
        },
    }))
}

/// Liveness probe.
///
/// # Endpoint
///
/// `GET /health`
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
