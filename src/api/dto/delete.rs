//! DTOs for the delete endpoint.

use serde::{Deserialize, Serialize};

/// Query parameters identifying the requesting owner.
///
/// Anonymous links (no owner) are deleted by omitting `owner_id`.
#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub owner_id: Option<i64>,
}

/// Confirmation payload for a successful deletion.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}
