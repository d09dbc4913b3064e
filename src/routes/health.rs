//! Health check endpoints
//!
//! Provides endpoints for monitoring and container orchestration:
//! - `/health` - Full health check with configuration status
//! - `/health/ready` - Readiness probe
//! - `/health/live` - Liveness probe

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::AppState;

/// Health status enum
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Credential check result. Reports presence only.
#[derive(Debug, Serialize)]
pub struct CredentialCheck {
    pub status: HealthStatus,
    pub configured: bool,
}

/// Dependency checks collection
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub credential: CredentialCheck,
}

/// Relay settings surfaced for operators
#[derive(Debug, Serialize)]
pub struct RelaySettings {
    pub provider: &'static str,
    pub model: String,
    pub response_mode: String,
}

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub uptime_seconds: u64,
    pub timestamp: String,
    pub checks: HealthChecks,
    pub relay: RelaySettings,
}

/// Simple health response for liveness/readiness
#[derive(Debug, Serialize)]
pub struct SimpleHealthResponse {
    pub status: HealthStatus,
}

fn check_credential(state: &AppState) -> CredentialCheck {
    let configured = state.provider.is_configured();
    CredentialCheck {
        status: if configured {
            HealthStatus::Healthy
        } else {
            HealthStatus::Unhealthy
        },
        configured,
    }
}

/// Full health check endpoint
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<HealthResponse>) {
    let credential = check_credential(&state);
    let overall_status = credential.status.clone();

    let response = HealthResponse {
        status: overall_status.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        checks: HealthChecks { credential },
        relay: RelaySettings {
            provider: state.provider.name(),
            model: state.config.gemini_model.clone(),
            response_mode: state.config.response_mode.to_string(),
        },
    };

    let status_code = match overall_status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(response))
}

/// Readiness probe endpoint
///
/// Not ready while the upstream key is missing, since every relay request
/// would fail.
pub async fn readiness_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<SimpleHealthResponse>) {
    if !state.provider.is_configured() {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(SimpleHealthResponse {
                status: HealthStatus::Unhealthy,
            }),
        );
    }

    (
        StatusCode::OK,
        Json(SimpleHealthResponse {
            status: HealthStatus::Healthy,
        }),
    )
}

/// Liveness probe endpoint
pub async fn liveness_check() -> (StatusCode, Json<SimpleHealthResponse>) {
    (
        StatusCode::OK,
        Json(SimpleHealthResponse {
            status: HealthStatus::Healthy,
        }),
    )
}
