use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;
use crate::storage::Tour;

/// GET /api/tour/:tour_id - fetch a single record; storage answers `None`
/// for an unknown id and the miss is mapped to 404 here
pub async fn show_get(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(tour_id): Path<String>,
) -> Result<Json<Tour>, ApiError> {
    let tour = state
        .storage
        .get(&tour_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("tour {} not found", tour_id)))?;

    Ok(Json(tour))
}
