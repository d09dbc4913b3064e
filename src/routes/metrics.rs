//! Prometheus metrics endpoint
//!
//! Exposes application metrics in Prometheus format for monitoring.

use axum::response::IntoResponse;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::Lazy;

/// Global Prometheus handle for metrics export
static PROMETHEUS_HANDLE: Lazy<PrometheusHandle> = Lazy::new(|| {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder");
    register_metrics();
    handle
});

/// Initialize metrics (call once at startup)
pub fn init_metrics() {
    // Force initialization of the lazy static
    let _ = &*PROMETHEUS_HANDLE;
}

/// Register all custom metrics
fn register_metrics() {
    metrics::describe_counter!(
        "relay_requests_total",
        "Total number of relay requests by outcome"
    );
    metrics::describe_histogram!(
        "relay_request_duration_seconds",
        "Relay request duration in seconds"
    );
    metrics::describe_counter!(
        "relay_upstream_errors_total",
        "Non-success responses from the upstream API by status"
    );
}

/// Prometheus metrics endpoint handler
///
/// Returns metrics in Prometheus text format for scraping.
pub async fn prometheus_metrics() -> impl IntoResponse {
    PROMETHEUS_HANDLE.render()
}

/// Record a finished relay request
pub fn record_request(outcome: &str, duration_secs: f64) {
    metrics::counter!("relay_requests_total", "outcome" => outcome.to_string()).increment(1);
    metrics::histogram!("relay_request_duration_seconds", "outcome" => outcome.to_string())
        .record(duration_secs);
}

/// Record a non-success upstream status
pub fn record_upstream_error(status: u16) {
    metrics::counter!("relay_upstream_errors_total", "status" => status.to_string()).increment(1);
}
