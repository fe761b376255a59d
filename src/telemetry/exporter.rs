//! Prometheus exporter wiring.

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder with a scrape endpoint on `addr`.
///
/// Failure to install is logged, not fatal: the service keeps emitting
/// into the no-op recorder, which is acceptable for a signal generator
/// that may run without a scraper attached.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            tracing::info!(address = %addr, "Prometheus exporter listening");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install Prometheus exporter");
        }
    }
}
