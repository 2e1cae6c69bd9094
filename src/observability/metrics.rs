//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_requests_total` (counter): page requests by method, status, locale
//! - `gateway_locale_redirects_total` (counter): redirects by target locale
//!
//! # Design Decisions
//! - Low-overhead metric updates (atomic operations)
//! - Prometheus exporter runs on its own listener, enabled via config

use std::net::SocketAddr;

use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on the given address.
pub fn init_metrics(addr: SocketAddr) {
    let builder = PrometheusBuilder::new().with_http_listener(addr);
    match builder.install() {
        Ok(()) => {
            describe_counter!(
                "gateway_requests_total",
                "Total page requests by method, status, and locale"
            );
            describe_counter!(
                "gateway_locale_redirects_total",
                "Total locale redirects by target locale"
            );
            tracing::info!(address = %addr, "Metrics exporter listening");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install metrics exporter");
        }
    }
}

/// Record a handled page request.
pub fn record_request(method: &str, status: u16, locale: &str) {
    counter!(
        "gateway_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string(),
        "locale" => locale.to_string()
    )
    .increment(1);
}

/// Record a locale redirect.
pub fn record_locale_redirect(target_locale: &str) {
    counter!(
        "gateway_locale_redirects_total",
        "locale" => target_locale.to_string()
    )
    .increment(1);
}
