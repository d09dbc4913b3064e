//! Configuration management for Prompt Relay
//!
//! Configuration is loaded from environment variables once at startup and
//! injected into the application state.

use std::env;
use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use secrecy::SecretString;

/// Default upstream base URL
pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";

/// Default upstream model
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Default inbound body limit, matching Gemini's 20 MB inline request cap
pub const DEFAULT_MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

/// Shape of a successful relay response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseMode {
    /// Relay the upstream JSON body unchanged
    #[default]
    Full,
    /// Unwrap the first candidate into `{ "text": ... }`
    Text,
}

impl FromStr for ResponseMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "text" => Ok(Self::Text),
            other => anyhow::bail!("unknown response mode '{}', expected 'full' or 'text'", other),
        }
    }
}

impl fmt::Display for ResponseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("full"),
            Self::Text => f.write_str("text"),
        }
    }
}

/// Where the new prompt goes relative to the supplied chat history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptPlacement {
    /// `[prompt, ...history]`
    #[default]
    First,
    /// `[...history, prompt]`
    Last,
}

impl FromStr for PromptPlacement {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(Self::First),
            "last" => Ok(Self::Last),
            other => anyhow::bail!("unknown prompt placement '{}', expected 'first' or 'last'", other),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// Gemini API base URL
    pub gemini_api_url: String,
    /// Gemini API key. Absent keys are reported per request, not at startup.
    pub gemini_api_key: Option<SecretString>,
    /// Model used for `generateContent`
    pub gemini_model: String,

    pub response_mode: ResponseMode,
    pub prompt_placement: PromptPlacement,

    /// Largest accepted request body on the relay route
    pub max_body_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let model = lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());

        Ok(Self {
            host: lookup("RELAY_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("RELAY_PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .context("Invalid RELAY_PORT")?,

            gemini_api_url: lookup("GEMINI_API_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            gemini_api_key: lookup("GEMINI_API_KEY")
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::from),
            gemini_model: model.strip_prefix("models/").unwrap_or(&model).to_string(),

            response_mode: lookup("RELAY_RESPONSE_MODE")
                .map(|v| v.parse::<ResponseMode>())
                .transpose()
                .context("Invalid RELAY_RESPONSE_MODE")?
                .unwrap_or_default(),
            prompt_placement: lookup("RELAY_PROMPT_PLACEMENT")
                .map(|v| v.parse::<PromptPlacement>())
                .transpose()
                .context("Invalid RELAY_PROMPT_PLACEMENT")?
                .unwrap_or_default(),

            max_body_bytes: lookup("RELAY_MAX_BODY_BYTES")
                .map(|v| v.parse::<usize>())
                .transpose()
                .context("Invalid RELAY_MAX_BODY_BYTES")?
                .unwrap_or(DEFAULT_MAX_BODY_BYTES),
        })
    }

    /// Whether an upstream credential is available
    pub fn has_credential(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}
