//! # Common Test Utilities
//!
//! Test harnesses shared across the `researcher-server` integration tests.
//!
//! - `TestApp`: spawns the real router on a random port. The generation
//!   service is an `httpmock::MockServer` standing in for the Gemini API.
//! - Helpers for programming the two stage calls on that mock.

// Allow unused code because this is a test utility module, and not all
// functions might be used by every test file that includes it.
#![allow(unused)]

use anyhow::Result;
use axum::serve;
use httpmock::{Method::POST, Mock, MockServer};
use reqwest::Client;
use researcher_server::{
    config::{self, AppConfig},
    router,
    state::{build_app_state, AppState},
};
use serde_json::json;
use std::{fs::File, io::Write, net::SocketAddr};
use tempfile::{tempdir, TempDir};
use tokio::{net::TcpListener, task::JoinHandle};

pub const MODEL: &str = "mock-gemini";
pub const GEMINI_PATH: &str = "/models/mock-gemini:generateContent";

/// A phrase that only the research prompt contains.
pub const RESEARCH_MARKER: &str = "Provide a detailed and structured summary";
/// A phrase that only the validation prompt contains.
pub const VALIDATION_MARKER: &str = "Validate and refine the following data:";

// --- Full Application Test Harness ---

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    pub app_state: AppState,
    _config_dir: TempDir,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the server with a Gemini provider pointed at the mock server.
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with(|_| {}).await
    }

    /// Spawns the server after letting `adjust` modify the loaded configuration.
    pub async fn spawn_with(adjust: impl FnOnce(&mut AppConfig)) -> Result<Self> {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let mock_server = MockServer::start_async().await;

        let config_dir = tempdir()?;
        let config_path = config_dir.path().join("config.yml");
        let config_content = format!(
            r#"
port: 0
provider:
  provider: "gemini"
  api_url: "{}"
  api_key: "test-key"
  model_name: "{MODEL}"
"#,
            mock_server.base_url()
        );
        let mut file = File::create(&config_path)?;
        file.write_all(config_content.as_bytes())?;

        let mut config = config::get_config(config_path.to_str())?;
        adjust(&mut config);
        let app_state = build_app_state(&config);

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let state_for_server = app_state.clone();
        let server_handle = tokio::spawn(async move {
            let app = router::create_router(state_for_server);
            let server = serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            app_state,
            _config_dir: config_dir,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Programs the research call to answer with `text`.
    pub async fn mock_research(&self, text: &str) -> Mock<'_> {
        let body = gemini_body(text);
        self.mock_server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(GEMINI_PATH)
                    .header("x-goog-api-key", "test-key")
                    .body_contains(RESEARCH_MARKER);
                then.status(200).json_body(body);
            })
            .await
    }

    /// Programs the validation call to answer with `text`.
    pub async fn mock_validation(&self, text: &str) -> Mock<'_> {
        let body = gemini_body(text);
        self.mock_server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(GEMINI_PATH)
                    .body_contains(VALIDATION_MARKER);
                then.status(200).json_body(body);
            })
            .await
    }

    /// Programs the research call to fail with `status`.
    pub async fn mock_research_failure(&self, status: u16, body: &str) -> Mock<'_> {
        let body = body.to_string();
        self.mock_server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(GEMINI_PATH)
                    .body_contains(RESEARCH_MARKER);
                then.status(status).body(body);
            })
            .await
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.address)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            // The receiver might already be gone if the server task panicked,
            // so we ignore the result of send.
            let _ = tx.send(());
        }
    }
}

/// A `generateContent` response carrying `text`.
pub fn gemini_body(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }]
    })
}
