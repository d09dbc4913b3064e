//! Gemini `generateContent` client
//!
//! Forwards relay payloads to the Gemini REST API, passing the server-held
//! key as the `key` query parameter.

use async_trait::async_trait;
use axum::http::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    config::Config,
    error::{RelayError, RelayResult},
    proxy::{logging::RequestContext, provider::GenerativeProvider},
    relay::{upstream_failure, UpstreamPayload},
};

/// Gemini REST client
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<SecretString>,
}

impl GeminiClient {
    /// Create a new Gemini client
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.gemini_api_url.clone(),
            model: config.gemini_model.clone(),
            api_key: config.gemini_api_key.clone(),
        }
    }

    /// Endpoint URL without the credential
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }
}

#[async_trait]
impl GenerativeProvider for GeminiClient {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate_content(
        &self,
        payload: &UpstreamPayload,
        ctx: &RequestContext,
    ) -> RelayResult<Value> {
        let api_key = self.api_key.as_ref().ok_or(RelayError::ServerMisconfigured)?;

        let url = self.endpoint_url();
        let body = serde_json::to_vec(payload)?;
        ctx.log_upstream_request(&url, Some(body.len()));

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key.expose_secret())])
            .headers(Self::default_headers())
            .body(body)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                ctx.log_connection_error(&e.to_string(), &url);
                RelayError::Http(e)
            })?;

        let status = StatusCode::from_u16(response.status().as_u16())
            .unwrap_or(StatusCode::BAD_GATEWAY);
        ctx.log_upstream_response(status.as_u16(), response.content_length());

        if !status.is_success() {
            let text = response
                .text()
                .await
                .map_err(|e| RelayError::Http(e.without_url()))?;
            warn!(
                trace_id = %ctx.trace_id,
                status = %status,
                body = %text,
                "Upstream returned an error"
            );
            return Err(upstream_failure(status, &text));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| RelayError::Http(e.without_url()))?;
        debug!(trace_id = %ctx.trace_id, body_len = bytes.len(), "Upstream body received");

        serde_json::from_slice(&bytes).map_err(|e| {
            RelayError::UpstreamShape(format!("upstream body is not valid JSON: {}", e))
        })
    }
}
