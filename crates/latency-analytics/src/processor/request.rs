use super::util::{try_number, value_to_string};
use serde_json::{Map, Value};

/// Regions and breach threshold extracted from a request body.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsRequest {
    pub regions: Vec<String>,
    pub threshold_ms: f64,
}

impl AnalyticsRequest {
    pub fn new(regions: Vec<String>, threshold_ms: f64) -> Self {
        Self {
            regions,
            threshold_ms,
        }
    }

    /// Parse a raw request body. Never fails: a body that is not a JSON object
    /// is treated as `{}` and every field falls back to its default.
    pub fn from_body(body: &[u8], default_threshold_ms: f64) -> Self {
        let fields = match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(fields)) => fields,
            _ => Map::new(),
        };

        Self::from_fields(&fields, default_threshold_ms)
    }

    pub fn from_fields(fields: &Map<String, Value>, default_threshold_ms: f64) -> Self {
        let regions = match fields.get("regions") {
            Some(Value::Array(items)) => items.iter().map(value_to_string).collect(),
            _ => Vec::new(),
        };

        let threshold_ms = fields
            .get("threshold_ms")
            .and_then(try_number)
            .unwrap_or(default_threshold_ms);

        Self::new(regions, threshold_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processor::constants::DEFAULT_THRESHOLD_MS;

    fn parse(body: &str) -> AnalyticsRequest {
        AnalyticsRequest::from_body(body.as_bytes(), DEFAULT_THRESHOLD_MS)
    }

    #[test]
    fn test_full_body() {
        let req = parse(r#"{"regions": ["us", "eu"], "threshold_ms": 150}"#);
        assert_eq!(req.regions, vec!["us", "eu"]);
        assert_eq!(req.threshold_ms, 150.0);
    }

    #[test]
    fn test_defaults() {
        let req = parse("{}");
        assert!(req.regions.is_empty());
        assert_eq!(req.threshold_ms, 180.0);
    }

    #[test]
    fn test_malformed_body_is_empty_object() {
        for body in ["", "not json", "[1, 2, 3]", "\"us\"", "null"] {
            let req = parse(body);
            assert!(req.regions.is_empty(), "body {body:?}");
            assert_eq!(req.threshold_ms, 180.0, "body {body:?}");
        }
    }

    #[test]
    fn test_threshold_coercion() {
        assert_eq!(parse(r#"{"threshold_ms": "200"}"#).threshold_ms, 200.0);
        assert_eq!(parse(r#"{"threshold_ms": "abc"}"#).threshold_ms, 180.0);
        assert_eq!(parse(r#"{"threshold_ms": null}"#).threshold_ms, 180.0);
        assert_eq!(parse(r#"{"threshold_ms": 0}"#).threshold_ms, 0.0);
    }

    #[test]
    fn test_regions_coercion() {
        let req = parse(r#"{"regions": ["us", 5, null]}"#);
        assert_eq!(req.regions, vec!["us", "5", ""]);

        let req = parse(r#"{"regions": "us"}"#);
        assert!(req.regions.is_empty());
    }
}
