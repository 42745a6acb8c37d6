//! Handler for link deletion.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::api::dto::delete::{DeleteQuery, DeleteResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Deletes a short link and, by cascade, all its click events.
///
/// # Endpoint
///
/// `DELETE /{code}?owner_id={id}`
///
/// The owner must match the record: owned links require their owner's id,
/// anonymous links are deleted without one.
///
/// # Errors
///
/// Returns 404 when the code does not exist or belongs to someone else;
/// the two cases are deliberately indistinguishable.
pub async fn delete_handler(
    Path(code): Path<String>,
    Query(query): Query<DeleteQuery>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.url_service.delete_url(&code, query.owner_id).await?;

    Ok(Json(DeleteResponse {
        message: "URL deleted successfully",
    }))
}
