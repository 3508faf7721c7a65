use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated caller context resolved from the bearer token
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub username: String,
    pub is_admin: bool,
}

/// Bearer-token middleware that resolves the caller against the static user
/// table and injects an `AuthUser` into the request. A missing or malformed
/// header is 401; a token nobody owns is 403.
pub async fn bearer_auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !state.auth_required {
        // No-auth mode mirrors the early iterations of the service; every
        // caller passes the admin gate.
        request.extensions_mut().insert(AuthUser {
            username: "anonymous".to_string(),
            is_admin: true,
        });
        return Ok(next.run(request).await);
    }

    let token = extract_bearer_token(&headers)?;
    let user = state
        .users
        .resolve(&token)
        .ok_or_else(|| ApiError::forbidden("Invalid authentication credentials"))?;

    request.extensions_mut().insert(AuthUser {
        username: user.username.clone(),
        is_admin: user.is_admin,
    });

    Ok(next.run(request).await)
}

/// Extract the bearer token from the Authorization header
fn extract_bearer_token(headers: &HeaderMap) -> Result<String, ApiError> {
    let auth_header = headers
        .get("authorization")
        .ok_or_else(|| ApiError::unauthorized("Missing Authorization header"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::unauthorized("Invalid Authorization header format"))?;

    // Strict `Bearer <token>` parse: no padding around or inside the token
    match auth_str.strip_prefix("Bearer ") {
        Some(token) if !token.is_empty() && !token.chars().any(char::is_whitespace) => {
            Ok(token.to_string())
        }
        Some(_) => Err(ApiError::unauthorized("Malformed bearer token")),
        None => Err(ApiError::unauthorized(
            "Authorization header must use Bearer token format",
        )),
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &AppState) -> Result<Self, ApiError> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| ApiError::unauthorized("Missing authentication context"))
    }
}

/// Extractor that additionally requires the admin flag
pub struct AdminUser(pub AuthUser);

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, ApiError> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !user.is_admin {
            return Err(ApiError::forbidden("Administrator privileges required"));
        }
        Ok(AdminUser(user))
    }
}
