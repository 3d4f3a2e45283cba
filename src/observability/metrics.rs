//! Metrics collection and exposition.
//!
//! # Metrics
//! - `wallet_session_connects_total` (counter): connect requests handled
//! - `wallet_session_connect_failures_total` (counter): connects the
//!   connector refused
//! - `wallet_session_disconnects_total` (counter): disconnect requests handled

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

pub const SESSION_CONNECTS_TOTAL: &str = "wallet_session_connects_total";
pub const SESSION_CONNECT_FAILURES_TOTAL: &str = "wallet_session_connect_failures_total";
pub const SESSION_DISCONNECTS_TOTAL: &str = "wallet_session_disconnects_total";

/// Install the Prometheus recorder and scrape endpoint.
///
/// Must run inside a tokio runtime. Failure to bind is logged, not fatal:
/// the widget works without metrics.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            metrics::describe_counter!(SESSION_CONNECTS_TOTAL, "Connect requests handled");
            metrics::describe_counter!(
                SESSION_CONNECT_FAILURES_TOTAL,
                "Connect requests the connector refused"
            );
            metrics::describe_counter!(SESSION_DISCONNECTS_TOTAL, "Disconnect requests handled");
            tracing::info!(address = %addr, "Metrics endpoint started");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to start metrics endpoint");
        }
    }
}
