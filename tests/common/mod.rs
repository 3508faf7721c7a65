use std::sync::Arc;

use anyhow::{Context, Result};
use tempfile::TempDir;

use tour_api::auth::StaticUserTable;
use tour_api::storage::JsonStorage;
use tour_api::{app, AppState};

// Credentials from the default static user table
pub const ADMIN_CREDENTIALS: (&str, &str) = ("admin", "admin-secret");
pub const READER_CREDENTIALS: (&str, &str) = ("johndoe", "secret");

/// In-process server with its own temporary store file, so tests stay
/// isolated from each other.
pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
    _data_dir: TempDir,
}

impl TestServer {
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with_auth(true).await
    }

    /// Server with the bearer gate disabled, as in the no-auth iterations.
    pub async fn spawn_without_auth() -> Result<Self> {
        Self::spawn_with_auth(false).await
    }

    async fn spawn_with_auth(auth_required: bool) -> Result<Self> {
        let data_dir = tempfile::tempdir().context("failed to create temp dir")?;
        let storage = JsonStorage::new(data_dir.path().join("storage.json"));

        let state = AppState {
            storage: Arc::new(storage),
            users: Arc::new(StaticUserTable::default()),
            auth_required,
        };

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .context("failed to bind test listener")?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            axum::serve(listener, app(state)).await.expect("test server");
        });

        Ok(Self {
            base_url: format!("http://{}", addr),
            client: reqwest::Client::new(),
            _data_dir: data_dir,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn token_for(&self, username: &str, password: &str) -> Result<String> {
        let res = self
            .client
            .post(self.url("/api/token"))
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;
        anyhow::ensure!(
            res.status().is_success(),
            "token request failed with {}",
            res.status()
        );

        let body: serde_json::Value = res.json().await?;
        Ok(body["access_token"]
            .as_str()
            .context("missing access_token")?
            .to_string())
    }

    pub async fn admin_token(&self) -> Result<String> {
        self.token_for(ADMIN_CREDENTIALS.0, ADMIN_CREDENTIALS.1).await
    }

    pub async fn reader_token(&self) -> Result<String> {
        self.token_for(READER_CREDENTIALS.0, READER_CREDENTIALS.1)
            .await
    }

    /// Create a tour as admin and return the response body.
    pub async fn create_tour(&self, payload: &serde_json::Value) -> Result<serde_json::Value> {
        let token = self.admin_token().await?;
        let res = self
            .client
            .post(self.url("/api/tour/create"))
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;
        anyhow::ensure!(
            res.status() == reqwest::StatusCode::CREATED,
            "create failed with {}",
            res.status()
        );
        Ok(res.json().await?)
    }
}
