pub mod constants;
pub mod record;
pub mod region;
pub mod request;
pub mod util;

use crate::{Result, ingestor::dataset::load_records};
use region::{AnalyticsResponse, aggregate};
use request::AnalyticsRequest;
use std::path::Path;
use tracing::debug;

/// Load the dataset at `data_file` and compute stats for every requested region.
///
/// The file is read and parsed on every call. A read or parse failure fails the
/// whole request; no partial results are returned.
pub fn run_analytics(data_file: &Path, request: &AnalyticsRequest) -> Result<AnalyticsResponse> {
    let records = load_records(data_file)?;

    debug!(
        records = records.len(),
        regions = request.regions.len(),
        threshold_ms = request.threshold_ms,
        "aggregating telemetry"
    );

    Ok(AnalyticsResponse {
        regions: aggregate(&records, &request.regions, request.threshold_ms),
    })
}
