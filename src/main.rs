use std::sync::Arc;

use tour_api::auth::StaticUserTable;
use tour_api::storage::JsonStorage;
use tour_api::{app, AppState};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up STORAGE_FILE, AUTH_REQUIRED, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = tour_api::config::config();
    tracing::info!("Starting tour API in {:?} mode", config.environment);

    let state = AppState {
        storage: Arc::new(JsonStorage::new(&config.storage.file_path)),
        users: Arc::new(StaticUserTable::default()),
        auth_required: config.security.auth_required,
    };

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("tour API listening on http://{}", bind_addr);

    axum::serve(listener, app(state)).await.expect("server");
}
