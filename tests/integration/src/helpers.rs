//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, minting session tokens
//! and making HTTP requests.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use forum_api::{create_app, create_app_state, AppState};
use forum_common::{try_init_tracing, AppConfig, JwtService};
use forum_core::UserId;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Secret used when `JWT_SECRET` is not set
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub state: AppState,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a test server on the in-memory store
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config("memory")?).await
    }

    /// Start a test server on PostgreSQL, or `None` when DATABASE_URL is unset
    pub async fn start_postgres() -> Result<Option<Self>> {
        if std::env::var("DATABASE_URL").is_err() {
            eprintln!("Skipping test: DATABASE_URL not set");
            return Ok(None);
        }
        Ok(Some(Self::start_with_config(test_config("postgres")?).await?))
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        // Every test starts a server; only the first one installs the subscriber
        let _ = try_init_tracing();

        let state = create_app_state(config).await?;
        let app = create_app(state.clone())?;

        // Port 0 lets the OS pick a free port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            state,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Mint an access token the server accepts for `user_id`
    pub fn token_for(&self, user_id: &str) -> Result<String> {
        Ok(self
            .state
            .services()
            .jwt_service()
            .issue_access_token(&UserId::from(user_id))?)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a POST request with auth token and a raw JSON-typed body
    pub async fn post_raw_auth(&self, path: &str, token: &str, body: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .bearer_auth(token)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()
            .await?)
    }
}

/// Create a test configuration for the given storage backend
///
/// Values come from the environment (and `.env`), with test defaults for
/// anything the environment leaves unset.
pub fn test_config(backend: &str) -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_lookup(|key| match key {
        "STORAGE_BACKEND" => Some(backend.to_string()),
        "API_PORT" => Some("0".to_string()),
        "JWT_SECRET" => {
            Some(std::env::var(key).unwrap_or_else(|_| TEST_JWT_SECRET.to_string()))
        }
        // Tests fire requests in quick bursts
        "RATE_LIMIT_REQUESTS_PER_SECOND" => Some("1000".to_string()),
        "RATE_LIMIT_BURST" => Some("1000".to_string()),
        _ => std::env::var(key).ok(),
    })
    .map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    Ok(config)
}

/// A token signed with a secret the server does not know
pub fn foreign_token(user_id: &str) -> Result<String> {
    Ok(JwtService::new("not-the-server-secret", 900).issue_access_token(&UserId::from(user_id))?)
}

/// Assert response status and return the plain-text body
pub async fn assert_text(response: Response, expected_status: StatusCode) -> Result<String> {
    let status = response.status();
    let body = response.text().await?;
    if status != expected_status {
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(body)
}

/// Assert response status without inspecting the body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    assert_text(response, expected_status).await.map(|_| ())
}
