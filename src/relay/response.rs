//! Upstream result mapping
//!
//! Converts raw upstream responses into relay results: typed parsing of the
//! error envelope with a raw-text fallback, and the success body shaped by
//! the configured [`ResponseMode`].

use axum::http::StatusCode;
use serde_json::Value;

use crate::config::ResponseMode;
use crate::error::{RelayError, RelayResult};
use crate::relay::types::{GenerateContentResponse, TextResponse, UpstreamErrorBody};

/// Message extracted from an upstream error body
#[derive(Debug, PartialEq, Eq)]
pub enum UpstreamErrorMessage {
    /// The body matched `{ "error": { ... } }`
    Structured(Option<String>),
    /// The body was not the expected JSON envelope
    Raw(String),
}

impl UpstreamErrorMessage {
    /// Parse an upstream error body
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<UpstreamErrorBody>(raw) {
            Ok(body) => Self::Structured(body.error.message.filter(|m| !m.trim().is_empty())),
            Err(_) => Self::Raw(raw.to_string()),
        }
    }

    /// Message to report to the caller
    pub fn into_message(self) -> String {
        match self {
            Self::Structured(Some(message)) => message,
            Self::Structured(None) => "Unknown error from upstream API".to_string(),
            Self::Raw(text) => format!("Upstream API error: {}", text),
        }
    }
}

/// Map a non-success upstream response into a relay error carrying its status
pub fn upstream_failure(status: StatusCode, raw_body: &str) -> RelayError {
    RelayError::Upstream {
        status,
        message: UpstreamErrorMessage::parse(raw_body).into_message(),
    }
}

/// Shape a successful upstream body for the caller
pub fn shape_success(body: Value, mode: ResponseMode) -> RelayResult<Value> {
    match mode {
        ResponseMode::Full => Ok(body),
        ResponseMode::Text => {
            let text = extract_text(body)?;
            Ok(serde_json::to_value(TextResponse { text })?)
        }
    }
}

/// Extract `candidates[0].content.parts[0].text`
pub fn extract_text(body: Value) -> RelayResult<String> {
    let response: GenerateContentResponse = serde_json::from_value(body)
        .map_err(|e| RelayError::UpstreamShape(format!("malformed generateContent body: {}", e)))?;

    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .ok_or_else(|| RelayError::UpstreamShape("no candidate text in response".to_string()))
}
