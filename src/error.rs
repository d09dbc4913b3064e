//! Error types for Prompt Relay
//!
//! Every failure in a relay request ends up as a [`RelayError`], and the
//! [`IntoResponse`] impl is the single place where errors become HTTP
//! responses of the form `{ "error": "<message>" }`.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Relay-level errors
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    InvalidInput(String),

    /// The request body could not be read (e.g. over the size limit)
    #[error("{message}")]
    BodyRejected { status: StatusCode, message: String },

    #[error("The upstream API key is not configured on the server")]
    ServerMisconfigured,

    #[error("{message}")]
    Upstream { status: StatusCode, message: String },

    #[error("Unexpected response from upstream API: {0}")]
    UpstreamShape(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl RelayError {
    /// HTTP status the error is reported with
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RelayError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            RelayError::BodyRejected { status, .. } => *status,
            RelayError::Upstream { status, .. } => *status,
            RelayError::ServerMisconfigured
            | RelayError::UpstreamShape(_)
            | RelayError::Http(_)
            | RelayError::Json(_)
            | RelayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short label used for metrics and logs
    pub fn kind(&self) -> &'static str {
        match self {
            RelayError::MethodNotAllowed => "method_not_allowed",
            RelayError::InvalidInput(_) => "invalid_input",
            RelayError::BodyRejected { .. } => "body_rejected",
            RelayError::ServerMisconfigured => "server_misconfigured",
            RelayError::Upstream { .. } => "upstream_error",
            RelayError::UpstreamShape(_) => "upstream_shape",
            RelayError::Http(_) | RelayError::Json(_) | RelayError::Internal(_) => "internal",
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // reqwest errors carry the request URL, which holds the API key
        let message = match self {
            RelayError::Http(e) => e.without_url().to_string(),
            other => other.to_string(),
        };
        let message = if message.trim().is_empty() {
            "Internal server error while processing the request".to_string()
        } else {
            message
        };

        let mut response = (status, Json(ErrorResponse { error: message })).into_response();
        if status == StatusCode::METHOD_NOT_ALLOWED {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static("POST"));
        }
        response
    }
}

/// Result type alias for convenience
pub type RelayResult<T> = Result<T, RelayError>;
