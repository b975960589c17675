//! Prometheus metrics endpoint
//!
//! Exposes application metrics in Prometheus format for monitoring.

use std::time::Duration;

use axum::response::IntoResponse;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::Lazy;

/// Global Prometheus handle for metrics export
static PROMETHEUS_HANDLE: Lazy<PrometheusHandle> = Lazy::new(|| {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder")
});

/// Initialize metrics (call once at startup)
pub fn init_metrics() {
    // Force initialization of the lazy static
    let _ = &*PROMETHEUS_HANDLE;

    register_metrics();
}

/// Register all custom metrics
fn register_metrics() {
    metrics::describe_counter!(
        "relay_requests_total",
        "Total number of chat requests processed"
    );
    metrics::describe_histogram!(
        "relay_request_duration_seconds",
        "Chat request duration in seconds"
    );
    metrics::describe_counter!(
        "relay_dispatch_total",
        "Relay dispatches by outcome"
    );
    metrics::describe_histogram!(
        "relay_dispatch_duration_seconds",
        "Time spent in a relay dispatch, all attempts included"
    );
    metrics::describe_counter!(
        "relay_attempts_total",
        "Single-credential attempts by result"
    );
    metrics::describe_counter!(
        "relay_fallback_total",
        "Chat replies answered with a canned fallback"
    );
}

/// Prometheus metrics endpoint handler
///
/// Returns metrics in Prometheus text format for scraping.
pub async fn prometheus_metrics() -> impl IntoResponse {
    PROMETHEUS_HANDLE.render()
}

/// Record a chat request
pub fn record_request(status: &str, duration_secs: f64) {
    metrics::counter!("relay_requests_total", "status" => status.to_string()).increment(1);
    metrics::histogram!("relay_request_duration_seconds").record(duration_secs);
}

/// Record the outcome of a relay dispatch
pub fn record_dispatch(outcome: &str, elapsed: Duration) {
    metrics::counter!("relay_dispatch_total", "outcome" => outcome.to_string()).increment(1);
    metrics::histogram!("relay_dispatch_duration_seconds").record(elapsed.as_secs_f64());
}

/// Record one credential attempt
pub fn record_attempt(result: &str) {
    metrics::counter!("relay_attempts_total", "result" => result.to_string()).increment(1);
}

/// Record a canned reply served instead of generated text
pub fn record_fallback(reason: &str) {
    metrics::counter!("relay_fallback_total", "reason" => reason.to_string()).increment(1);
}
