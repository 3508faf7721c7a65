use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::AdminUser;
use crate::state::AppState;

/// DELETE /api/tour/:tour_id - remove a record. Deleting an unknown id is a
/// no-op that still answers 200.
pub async fn tour_delete(
    State(state): State<AppState>,
    AdminUser(_user): AdminUser,
    Path(tour_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.storage.delete(&tour_id).await?;
    Ok(Json(json!({ "message": "Tour successfully deleted" })))
}
