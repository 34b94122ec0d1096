use std::net::SocketAddr;

// ── Query metrics ───────────────────────────────────────────────

/// Counter: total queries executed. Labels: command, outcome.
pub const QUERIES_TOTAL: &str = "booker_queries_total";

/// Histogram: per-query latency in seconds. Labels: command.
pub const QUERY_DURATION_SECONDS: &str = "booker_query_duration_seconds";

// ── Booking metrics ─────────────────────────────────────────────

/// Counter: successful `book` commits.
pub const BOOKINGS_COMMITTED_TOTAL: &str = "booker_bookings_committed_total";

/// Histogram: resources that received a direct booking per commit.
pub const RESOURCES_PER_BOOKING: &str = "booker_resources_per_booking";

// ── Run metrics ─────────────────────────────────────────────────

/// Gauge: resources in the loaded hierarchy.
pub const HIERARCHY_RESOURCES: &str = "booker_hierarchy_resources";

/// Histogram: whole query batch duration in seconds.
pub const RUN_DURATION_SECONDS: &str = "booker_run_duration_seconds";

/// Install Prometheus metrics exporter on the given port. No-op if port is None.
/// Must be called from inside a tokio runtime.
pub fn init(port: Option<u16>) -> Result<(), metrics_exporter_prometheus::BuildError> {
    let Some(port) = port else { return Ok(()) };
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()?;
    tracing::info!("metrics endpoint: http://0.0.0.0:{port}/metrics");
    Ok(())
}
