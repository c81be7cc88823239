use super::{
    constants::{LATENCY_KEYS, REGION_KEY, UPTIME_KEYS, UPTIME_RATIO_CEILING},
    util::{to_number, value_to_string},
};
use serde::Deserialize;
use serde_json::{Map, Value};

/// One telemetry observation with loosely-typed fields.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct TelemetryRecord(Map<String, Value>);

impl TelemetryRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Region identifier as a string; empty when missing or null.
    pub fn region(&self) -> String {
        self.get(REGION_KEY)
            .map(value_to_string)
            .unwrap_or_default()
    }

    /// Case-insensitive region match. `region_lower` must already be lowercased.
    pub fn in_region(&self, region_lower: &str) -> bool {
        self.region().to_lowercase() == region_lower
    }

    /// Latency in milliseconds. The first alias key present wins, even when its
    /// value is null (which coerces to 0.0).
    pub fn latency_ms(&self) -> f64 {
        to_number(LATENCY_KEYS.iter().find_map(|key| self.get(key)))
    }

    /// Uptime expressed as a percentage. The first alias with a non-null value
    /// wins; no such alias yields 0.0.
    pub fn uptime_percent(&self) -> f64 {
        UPTIME_KEYS
            .iter()
            .find_map(|key| self.get(key).filter(|v| !v.is_null()))
            .map(|raw| normalize_uptime(to_number(Some(raw))))
            .unwrap_or(0.0)
    }
}

/// Scale ratio-looking uptime values to percent.
///
/// Values in [0, 1.5] are treated as ratios. A genuine percentage below 1.5
/// (e.g. 1.2%) is therefore read as 120%; the two are indistinguishable here.
pub fn normalize_uptime(value: f64) -> f64 {
    if (0.0..=UPTIME_RATIO_CEILING).contains(&value) {
        value * 100.0
    } else {
        value
    }
}
