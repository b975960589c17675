//! Companion Relay - chat relay for the AI companion demo
//!
//! This library provides the server side of the companion chat: a
//! key-rotating relay to the Gemini API, an avatar image proxy, and the
//! small status endpoints the browser front end polls.

pub mod config;
pub mod docs;
pub mod error;
pub mod fallback;
pub mod relay;
pub mod routes;
pub mod waifu;

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;

pub use crate::config::Config;
pub use crate::relay::{CredentialPool, GeminiClient, GenerationBackend, KeyRotatingRelay};
pub use crate::waifu::WaifuClient;

/// Application state shared across all request handlers
pub struct AppState {
    pub config: Config,
    pub start_time: Instant,
    /// Relay answering chat requests
    pub relay: Arc<KeyRotatingRelay>,
    /// Client for the avatar image search
    pub waifu_client: Arc<WaifuClient>,
}

impl AppState {
    /// Create a new application state backed by the Gemini API
    pub fn new(config: Config) -> Result<Self> {
        let http_client = Self::build_http_client()?;

        let backend: Arc<dyn GenerationBackend> =
            Arc::new(GeminiClient::new(http_client.clone(), &config));

        Ok(Self::with_backend(config, http_client, backend))
    }

    /// Create an application state with a custom generation backend
    pub fn with_backend(
        config: Config,
        http_client: reqwest::Client,
        backend: Arc<dyn GenerationBackend>,
    ) -> Self {
        let relay = Arc::new(KeyRotatingRelay::new(
            CredentialPool::new(config.gemini_keys.iter().cloned()),
            backend,
            config.attempt_timeout(),
        ));
        let waifu_client = Arc::new(WaifuClient::new(http_client, &config));

        Self {
            config,
            start_time: Instant::now(),
            relay,
            waifu_client,
        }
    }

    /// HTTP client with connection pooling.
    ///
    /// The overall timeout is a backstop; relay attempts carry their own.
    fn build_http_client() -> Result<reqwest::Client> {
        Ok(reqwest::Client::builder()
            .pool_max_idle_per_host(100)
            .timeout(Duration::from_secs(120))
            .build()?)
    }
}
