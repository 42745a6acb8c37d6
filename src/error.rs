//! Application error type and HTTP mapping.
//!
//! One enum covers the whole taxonomy: validation failures (400), unknown
//! codes (404), lapsed links (410), password gates (401), storage conflicts
//! (409, retried internally during code allocation), code-space exhaustion
//! and database failures (500).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    /// The code existed but its expiry has passed. Distinct from [`AppError::NotFound`]
    /// so clients can tell "never existed" from "existed but lapsed".
    #[error("{message}")]
    Expired { message: String, details: Value },
    /// The link is password protected and no password was supplied.
    #[error("{message}")]
    PasswordRequired { message: String, details: Value },
    #[error("{message}")]
    Unauthorized { message: String, details: Value },
    /// Unique constraint violation at insert time. During code allocation this
    /// is a retry signal, not a client error.
    #[error("{message}")]
    Conflict { message: String, details: Value },
    /// The code allocation retry budget was spent without finding a free code.
    #[error("{message}")]
    Exhausted { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn expired(message: impl Into<String>, details: Value) -> Self {
        Self::Expired {
            message: message.into(),
            details,
        }
    }
    pub fn password_required(message: impl Into<String>, details: Value) -> Self {
        Self::PasswordRequired {
            message: message.into(),
            details,
        }
    }
    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn exhausted(message: impl Into<String>, details: Value) -> Self {
        Self::Exhausted {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Status code this error maps to on the wire.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Expired { .. } => StatusCode::GONE,
            AppError::PasswordRequired { .. } | AppError::Unauthorized { .. } => {
                StatusCode::UNAUTHORIZED
            }
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Exhausted { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn into_parts(self) -> (StatusCode, &'static str, String, Value) {
        let status = self.status_code();
        match self {
            AppError::Validation { message, details } => {
                (status, "validation_error", message, details)
            }
            AppError::NotFound { message, details } => (status, "not_found", message, details),
            AppError::Expired { message, details } => (status, "expired", message, details),
            AppError::PasswordRequired { message, details } => {
                (status, "password_required", message, details)
            }
            AppError::Unauthorized { message, details } => {
                (status, "unauthorized", message, details)
            }
            AppError::Conflict { message, details } => (status, "conflict", message, details),
            AppError::Exhausted { message, details } => {
                (status, "code_space_exhausted", message, details)
            }
            AppError::Internal { message, details } => {
                (status, "internal_error", message, details)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = self.into_parts();

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                return AppError::conflict(
                    "Unique constraint violation",
                    json!({ "constraint": db.constraint() }),
                );
            }
        }

        tracing::error!("database error: {e}");
        AppError::internal("Database error", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or(Value::Null);
        AppError::bad_request("Request validation failed", details)
    }
}
