//! Metrics collection and Prometheus export.
//!
//! Initializes the metrics exporter and provides the /metrics endpoint handler.

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use std::time::Duration;

/// Global handle to the Prometheus recorder.
pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Outcome label for a successful ask.
pub const OUTCOME_ANSWERED: &str = "answered";

/// Install the Prometheus recorder. Call once at startup, before any metric
/// is recorded; metrics recorded without a recorder are dropped.
pub fn init_metrics() -> anyhow::Result<()> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("failed to install Prometheus recorder: {}", e))?;

    METRICS_HANDLE
        .set(handle)
        .map_err(|_| anyhow::anyhow!("failed to set metrics handle: already initialized"))
}

/// Get the current metrics in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized".to_string())
}

/// Count one finished ask request by outcome (`answered` or an error kind).
pub fn record_ask_outcome(outcome: &'static str) {
    counter!("gateway_ask_requests_total", "outcome" => outcome).increment(1);
}

/// Time spent waiting on the upstream model for one ask.
pub fn record_upstream_latency(model: &str, elapsed: Duration) {
    histogram!("gateway_upstream_latency_seconds", "model" => model.to_string())
        .record(elapsed.as_secs_f64());
}
