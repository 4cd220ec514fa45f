//! Metrics collection and exposition.
//!
//! # Metrics
//! - `router_transactions_total` (counter): acknowledged transfers by route
//! - `router_no_match_total` (counter): active ticks that matched no route
//! - `router_bus_errors_total` (counter): error flags seen by the requester, by source
//!
//! # Design Decisions
//! - Labels for route and error source only
//! - Recorder installed by the binary; the library only emits

use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

pub const TRANSACTIONS_TOTAL: &str = "router_transactions_total";
pub const NO_MATCH_TOTAL: &str = "router_no_match_total";
pub const BUS_ERRORS_TOTAL: &str = "router_bus_errors_total";

/// Install a Prometheus recorder and describe the router metrics.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    describe_counter!(TRANSACTIONS_TOTAL, "Transfers acknowledged by a responder");
    describe_counter!(NO_MATCH_TOTAL, "Active ticks whose address matched no route");
    describe_counter!(BUS_ERRORS_TOTAL, "Error flags observed by the requester");
    Ok(handle)
}

pub fn record_transaction(route: &str) {
    counter!(TRANSACTIONS_TOTAL, "route" => route.to_string()).increment(1);
}

pub fn record_no_match() {
    counter!(NO_MATCH_TOTAL).increment(1);
}

/// `source` is `"responder"` or `"no_match"`.
pub fn record_bus_error(source: &'static str) {
    counter!(BUS_ERRORS_TOTAL, "source" => source).increment(1);
}
