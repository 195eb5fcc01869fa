//! Observability module for metrics.
//!
//! Prometheus export of submission counts, latencies and stream sizes.

mod metrics;

pub use metrics::{
    MetricsConfig, MetricsError, init_metrics, record_attempt, record_execution,
    record_validation_failure, update_stream_sizes,
};
