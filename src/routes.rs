use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Json},
    routing::{get, patch, post},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{auth, tours};
use crate::middleware::bearer_auth_middleware;
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Token acquisition
        .route("/api/token", post(auth::token_post))
        // Tour API behind the bearer gate
        .merge(tour_routes(state.clone()))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn tour_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/tour/create", post(tours::create_post))
        .route("/api/tour/", get(tours::list_get))
        .route(
            "/api/tour/:tour_id",
            get(tours::show_get).delete(tours::tour_delete),
        )
        // Update lives under the plural path.
        .route("/api/tours/:tour_id", patch(tours::update_patch))
        .layer(middleware::from_fn_with_state(state, bearer_auth_middleware))
}

async fn root() -> Json<Value> {
    Json(json!({ "status": 200 }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.storage.list(0, 1, "").await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "storage": "ok"
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "storage_error": e.to_string()
            })),
        ),
    }
}
