//! Prompt Relay - credential-injecting relay for the Gemini API
//!
//! Accepts chat prompts and conversation history from clients, forwards them
//! to the upstream `generateContent` endpoint with a server-held key, and
//! relays the upstream result or a normalized `{ "error": ... }` body.

pub mod config;
pub mod error;
pub mod proxy;
pub mod relay;
pub mod routes;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;

pub use crate::config::{Config, PromptPlacement, ResponseMode};
pub use crate::error::{RelayError, RelayResult};
pub use crate::proxy::{GeminiClient, GenerativeProvider};

/// Application state shared across all request handlers
pub struct AppState {
    pub config: Config,
    pub start_time: Instant,
    /// Upstream generation API
    pub provider: Arc<dyn GenerativeProvider>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Result<Self> {
        // No request timeout: upstream calls are bounded by the host only
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(100)
            .build()?;

        let provider: Arc<dyn GenerativeProvider> =
            Arc::new(GeminiClient::new(http_client, &config));

        Ok(Self::with_provider(config, provider))
    }

    /// Create an application state around an existing provider
    pub fn with_provider(config: Config, provider: Arc<dyn GenerativeProvider>) -> Self {
        Self {
            config,
            start_time: Instant::now(),
            provider,
        }
    }
}
