use crate::{Error, Result, processor::record::TelemetryRecord};
use serde_json::Value;
use std::{fs, path::Path};
use tracing::{debug, warn};

/// Read and parse the telemetry dataset at `path`.
///
/// Accepts either a plain list of records or an object with a `records` list.
/// Any other shape is an empty dataset; only I/O and JSON syntax errors fail.
pub fn load_records(path: &Path) -> Result<Vec<TelemetryRecord>> {
    let raw = fs::read_to_string(path).map_err(|source| Error::DataSourceRead {
        path: path.to_path_buf(),
        source,
    })?;

    let data: Value = serde_json::from_str(&raw).map_err(|source| Error::DataSourceParse {
        path: path.to_path_buf(),
        source,
    })?;

    let records = records_from_value(data);
    debug!(path = %path.display(), records = records.len(), "loaded telemetry dataset");

    Ok(records)
}

/// Unwrap a parsed dataset into its records.
pub fn records_from_value(data: Value) -> Vec<TelemetryRecord> {
    let items = match data {
        Value::Array(items) => items,
        Value::Object(mut fields) => match fields.remove("records") {
            Some(Value::Array(items)) => items,
            _ => {
                warn!("dataset object has no records list, treating as empty");
                return Vec::new();
            }
        },
        _ => {
            warn!("dataset is neither a list nor an object, treating as empty");
            return Vec::new();
        }
    };

    let total = items.len();
    let records: Vec<TelemetryRecord> = items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(fields) => Some(TelemetryRecord::new(fields)),
            _ => None,
        })
        .collect();

    if records.len() < total {
        debug!(skipped = total - records.len(), "skipped non-object dataset entries");
    }

    records
}
