use anyhow::{Context, Result};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::{net::SocketAddr, time::Duration};
use tracing::info;

pub const OUTCOME_OK: &str = "ok";
// Any failure to produce a response body from the dataset
pub const OUTCOME_DATA_SOURCE_ERROR: &str = "data_source_error";

/// Install the Prometheus recorder and its scrape listener.
pub fn install_prometheus(addr: SocketAddr) -> Result<()> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .context("Failed to install Prometheus exporter")?;

    info!(%addr, "prometheus exporter listening");
    Ok(())
}

pub fn record_request(outcome: &'static str, regions: usize, elapsed: Duration) {
    metrics::counter!("latency_analytics_requests_total", "outcome" => outcome).increment(1);
    metrics::counter!("latency_analytics_regions_total").increment(regions as u64);
    metrics::histogram!("latency_analytics_aggregation_seconds").record(elapsed.as_secs_f64());
}

pub fn export_build_info() {
    let version = option_env!("BUILD_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
    let build_commit = option_env!("BUILD_COMMIT").unwrap_or("UNKNOWN");
    let build_date = option_env!("DATE").unwrap_or("UNKNOWN");
    let pkg_version = env!("CARGO_PKG_VERSION");

    metrics::gauge!(
        "latency_analytics_build_info",
        "version" => version,
        "commit" => build_commit,
        "date" => build_date,
        "pkg_version" => pkg_version
    )
    .set(1);
}
