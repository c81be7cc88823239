use super::constants::P95_QUANTILE;
use serde_json::Value;
use std::cmp::Ordering;

/// Best-effort numeric coercion of a loosely-typed field.
///
/// Numbers pass through, numeric strings are parsed after trimming whitespace
/// and an optional trailing `%`, booleans map to 1.0/0.0. Anything else,
/// including a missing value or a non-finite result, yields 0.0.
pub fn to_number(value: Option<&Value>) -> f64 {
    value.and_then(try_number).unwrap_or(0.0)
}

/// Same coercion as [`to_number`] but reports failure instead of defaulting.
pub fn try_number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_numeric_str(s),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };

    parsed.filter(|v| v.is_finite())
}

fn parse_numeric_str(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    trimmed.parse::<f64>().ok()
}

/// Render a field as the string used for region comparison.
/// Null renders as the empty string, same as a missing field.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let len = values.len() as f64;
    let sum: f64 = values.iter().sum();
    if sum.is_finite() {
        return sum / len;
    }

    // Large same-sign inputs overflow the plain sum
    values.iter().map(|v| v / len).sum()
}

/// Quantile `q` (0..=1) with linear interpolation between closest ranks.
pub fn percentile(values: &[f64], q: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let len = sorted.len();
    if len == 1 {
        return sorted[0];
    }

    // position on 0..len-1
    let pos = q.clamp(0.0, 1.0) * (len - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;

    if lo == hi {
        return sorted[lo];
    }

    // Weighted form stays finite where `hi - lo` would overflow
    let frac = pos - lo as f64;
    sorted[lo] * (1.0 - frac) + sorted[hi] * frac
}

pub fn p95(values: &[f64]) -> f64 {
    percentile(values, P95_QUANTILE)
}
