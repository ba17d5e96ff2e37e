//! Metrics collection for batch sorting
//!
//! Provides Prometheus-compatible metrics for batch counts, sequence
//! throughput, strategy duration and units of work in flight.

use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, register_int_gauge, Encoder, HistogramVec,
    IntCounterVec, IntGauge, TextEncoder,
};

use crate::sort::StrategyKind;

lazy_static! {
    /// Counter for sorted batches
    static ref BATCHES: IntCounterVec = register_int_counter_vec!(
        "batchsort_batches_total",
        "Total number of sorted batches",
        &["strategy"]
    ).unwrap();

    /// Counter for sorted sequences
    static ref SEQUENCES: IntCounterVec = register_int_counter_vec!(
        "batchsort_sequences_total",
        "Total number of sorted sequences",
        &["strategy"]
    ).unwrap();

    /// Histogram for strategy duration
    static ref BATCH_DURATION: HistogramVec = register_histogram_vec!(
        "batchsort_batch_duration_seconds",
        "Batch sort duration in seconds",
        &["strategy"],
        vec![0.00001, 0.0001, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0]
    ).unwrap();

    /// Gauge for units of work currently sorting
    static ref ACTIVE_UNITS: IntGauge = register_int_gauge!(
        "batchsort_active_units",
        "Number of concurrent units of work currently sorting"
    ).unwrap();
}

/// Metrics collector for one strategy
#[derive(Debug, Clone, Copy)]
pub struct MetricsCollector {
    strategy: StrategyKind,
}

impl MetricsCollector {
    /// Create a new metrics collector
    pub fn new(strategy: StrategyKind) -> Self {
        Self { strategy }
    }

    /// Record a finished batch
    pub fn record_batch(&self, sequences: usize, duration_secs: f64) {
        let label = self.strategy.as_str();
        BATCHES.with_label_values(&[label]).inc();
        SEQUENCES
            .with_label_values(&[label])
            .inc_by(sequences as u64);
        BATCH_DURATION
            .with_label_values(&[label])
            .observe(duration_secs);
    }
}

/// Marks one unit of work as active until dropped
#[must_use]
pub struct ActiveUnit(IntGauge);

impl ActiveUnit {
    /// Increment the active-units gauge
    pub fn enter() -> Self {
        Self::enter_on(ACTIVE_UNITS.clone())
    }

    fn enter_on(gauge: IntGauge) -> Self {
        gauge.inc();
        ActiveUnit(gauge)
    }
}

impl Drop for ActiveUnit {
    fn drop(&mut self) {
        self.0.dec();
    }
}

/// Export metrics in Prometheus text format
pub fn export_metrics() -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();

    encoder.encode(&metric_families, &mut buffer)
        .map_err(|e| format!("Failed to encode metrics: {}", e))?;

    String::from_utf8(buffer)
        .map_err(|e| format!("Failed to convert metrics to UTF-8: {}", e).into())
}
