//! Metrics definitions for the connection core.
//!
//! Metrics are collected using the `metrics` crate and can be exported
//! to Prometheus via `metrics-exporter-prometheus`. Without an installed
//! recorder every call here is a no-op.

use metrics::{counter, describe_counter, describe_histogram, histogram};

/// Initialize all metric descriptions.
/// Call this once at startup before any metrics are recorded.
pub fn init_metrics() {
    describe_counter!(
        "cursor_decode_failures_total",
        "Total number of cursors that failed to decode and fell back to the default bound"
    );
    describe_counter!(
        "connections_built_total",
        "Total number of connections computed by the windowing engine"
    );
    describe_histogram!(
        "connection_edges_returned",
        "Number of edges returned per computed connection"
    );
}

/// Record a cursor that failed to decode.
pub fn record_cursor_decode_failure() {
    counter!("cursor_decode_failures_total").increment(1);
}

/// Record one computed connection.
///
/// # Arguments
/// * `variant` - Which entry point built it ("array" or "slice")
/// * `edges` - Number of edges in the result
pub fn record_connection_built(variant: &'static str, edges: usize) {
    counter!("connections_built_total", "variant" => variant).increment(1);
    histogram!("connection_edges_returned", "variant" => variant).record(edges as f64);
}
