//! Metrics collection and exposition.
//!
//! # Metrics
//! - `relay_upstream_requests_total` (counter): upstream calls by endpoint, outcome
//! - `relay_upstream_request_duration_seconds` (histogram): upstream latency by endpoint
//!
//! The outcome label is the upstream status code, or `transport_error` when
//! no response arrived.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener on `addr`.
///
/// Must be called from within the Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record one finished upstream call.
pub fn record_upstream_call(endpoint: &'static str, outcome: &str, start: Instant) {
    ::metrics::counter!(
        "relay_upstream_requests_total",
        "endpoint" => endpoint,
        "outcome" => outcome.to_string()
    )
    .increment(1);
    ::metrics::histogram!(
        "relay_upstream_request_duration_seconds",
        "endpoint" => endpoint
    )
    .record(start.elapsed().as_secs_f64());
}
