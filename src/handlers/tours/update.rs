use axum::extract::{Path, State};

use crate::error::ApiError;
use crate::extract::Json;
use crate::middleware::AdminUser;
use crate::state::AppState;
use crate::storage::Tour;

use super::NewTour;

/// PATCH /api/tours/:tour_id - full-field replace keyed by id. Not a partial
/// patch: the complete field set is required and overwrites the record.
pub async fn update_patch(
    State(state): State<AppState>,
    AdminUser(_user): AdminUser,
    Path(tour_id): Path<String>,
    Json(payload): Json<NewTour>,
) -> Result<Json<Tour>, ApiError> {
    let draft = payload.into_draft()?;
    let tour = state.storage.update(&tour_id, draft).await?;
    Ok(Json(tour))
}
