use axum::{extract::State, response::Json};
use serde::Deserialize;

use crate::error::ApiError;
use crate::extract::Query;
use crate::middleware::AuthUser;
use crate::state::AppState;
use crate::storage::Tour;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub search_param: String,
}

fn default_limit() -> usize {
    10
}

/// GET /api/tour/ - paginated listing with optional substring search across
/// country, operator, description and tags
pub async fn list_get(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Tour>>, ApiError> {
    if query.limit == 0 {
        return Err(ApiError::validation_error(
            "limit must be greater than zero",
            None,
        ));
    }

    let tours = state
        .storage
        .list(query.skip, query.limit, &query.search_param)
        .await?;

    Ok(Json(tours))
}
