use axum::{extract::State, response::Json, Form};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

/// POST /api/token - exchange a username/password pair for the user's
/// pre-assigned bearer token. The error message never reveals which of the
/// two fields was wrong.
pub async fn token_post(
    State(state): State<AppState>,
    Form(form): Form<TokenRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = state
        .users
        .authenticate(&form.username, &form.password)
        .ok_or_else(|| ApiError::unauthorized("Incorrect username or password"))?;

    tracing::info!(username = %user.username, "issued token");

    Ok(Json(TokenResponse {
        access_token: user.token().to_string(),
        token_type: "bearer",
    }))
}
