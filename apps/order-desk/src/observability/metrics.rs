//! Prometheus metrics for the order desk.
//!
//! Recording is always safe: without an installed exporter the `metrics`
//! macros are no-ops.
//!
//! # Example
//!
//! ```ignore
//! use order_desk::observability::{init_metrics, record_attempt, MetricsConfig};
//!
//! init_metrics(&MetricsConfig::with_port(9090))?;
//! record_attempt("accepted", "MARKET", 0.042);
//! ```

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Configuration for the metrics exporter.
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    /// Address to bind the metrics HTTP listener.
    pub listen_addr: SocketAddr,
    /// Histogram buckets for latency measurements (in seconds).
    pub latency_buckets: Vec<f64>,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self::with_port(9090)
    }
}

impl MetricsConfig {
    /// Listen on all interfaces at `port`.
    #[must_use]
    pub fn with_port(port: u16) -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], port)),
            // A round trip to the order service: 5ms to 30s
            latency_buckets: vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0],
        }
    }
}

/// Initialize the Prometheus metrics exporter.
///
/// This starts an HTTP server that exposes metrics at `/metrics`.
pub fn init_metrics(config: &MetricsConfig) -> Result<(), MetricsError> {
    PrometheusBuilder::new()
        .with_http_listener(config.listen_addr)
        .set_buckets(&config.latency_buckets)
        .map_err(|e| MetricsError::Configuration(e.to_string()))?
        .install()
        .map_err(|e| MetricsError::Installation(e.to_string()))?;

    tracing::info!(
        addr = %config.listen_addr,
        "Prometheus metrics exporter started"
    );

    Ok(())
}

/// Error type for metrics operations.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    /// Failed to configure metrics exporter.
    #[error("metrics configuration error: {0}")]
    Configuration(String),
    /// Failed to install metrics exporter.
    #[error("metrics installation error: {0}")]
    Installation(String),
}

// ============================================================================
// Submission Metrics
// ============================================================================

/// Record a submission attempt that reached the network.
///
/// # Arguments
///
/// * `outcome` - `accepted`, `rejected` or `transport_failed`
/// * `order_type` - `MARKET`, `LIMIT` or `STOP`
/// * `latency_seconds` - Time spent waiting on the order service
pub fn record_attempt(outcome: &str, order_type: &str, latency_seconds: f64) {
    counter!(
        "order_desk_attempts_total",
        "outcome" => outcome.to_string(),
        "order_type" => order_type.to_string()
    )
    .increment(1);

    histogram!(
        "order_desk_submit_latency_seconds",
        "outcome" => outcome.to_string()
    )
    .record(latency_seconds);
}

/// Record a form that failed validation before any call was made.
pub fn record_validation_failure(field: &str) {
    counter!(
        "order_desk_validation_failures_total",
        "field" => field.to_string()
    )
    .increment(1);
}

/// Record a history entry by its UI status.
pub fn record_execution(status: &str) {
    counter!(
        "order_desk_executions_total",
        "status" => status.to_string()
    )
    .increment(1);
}

/// Update the stream size gauges.
#[allow(clippy::cast_precision_loss)]
pub fn update_stream_sizes(history: usize, event_log: usize) {
    gauge!("order_desk_history_records").set(history as f64);
    gauge!("order_desk_event_log_entries").set(event_log as f64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_listens_on_9090() {
        let config = MetricsConfig::default();
        assert_eq!(config.listen_addr.port(), 9090);
        assert!(config.latency_buckets.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn recording_without_exporter_is_a_no_op() {
        record_attempt("accepted", "MARKET", 0.01);
        record_validation_failure("price");
        record_execution("Filled");
        update_stream_sizes(1, 2);
    }
}
