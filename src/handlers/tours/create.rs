use axum::{extract::State, http::StatusCode};

use crate::error::ApiError;
use crate::extract::Json;
use crate::middleware::AdminUser;
use crate::state::AppState;
use crate::storage::Tour;

use super::NewTour;

/// POST /api/tour/create - validate the payload and append a new record
pub async fn create_post(
    State(state): State<AppState>,
    AdminUser(_user): AdminUser,
    Json(payload): Json<NewTour>,
) -> Result<(StatusCode, Json<Tour>), ApiError> {
    let draft = payload.into_draft()?;
    let tour = state.storage.create(draft).await?;
    Ok((StatusCode::CREATED, Json(tour)))
}
