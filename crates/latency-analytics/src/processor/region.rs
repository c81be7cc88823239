use super::{
    record::TelemetryRecord,
    util::{mean, p95},
};
use serde::{Deserialize, Serialize};
use tabled::{Table, Tabled, settings::Style};

/// Aggregate statistics for a single requested region.
#[derive(Debug, Clone, PartialEq, Tabled, Serialize, Deserialize)]
pub struct RegionStats {
    pub region: String,
    #[tabled(display = "display_two_dp", rename = "avg_latency(ms)")]
    pub avg_latency: f64,
    #[tabled(display = "display_two_dp", rename = "p95_latency(ms)")]
    pub p95_latency: f64,
    #[tabled(display = "display_two_dp", rename = "avg_uptime(%)")]
    pub avg_uptime: f64,
    pub breaches: u64,
}

/// Response body of the analytics endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsResponse {
    pub regions: Vec<RegionStats>,
}

impl AnalyticsResponse {
    pub fn to_table(&self) -> String {
        Table::new(&self.regions).with(Style::psql()).to_string()
    }
}

fn display_two_dp(value: &f64) -> String {
    format!("{value:.2}")
}

impl RegionStats {
    /// Compute stats for `region` over the records that already belong to it.
    pub fn from_records<'a, I>(region: &str, records: I, threshold_ms: f64) -> Self
    where
        I: IntoIterator<Item = &'a TelemetryRecord>,
    {
        let (latencies, uptimes): (Vec<f64>, Vec<f64>) = records
            .into_iter()
            .map(|r| (r.latency_ms(), r.uptime_percent()))
            .unzip();

        let breaches = latencies.iter().filter(|&&v| v > threshold_ms).count() as u64;

        RegionStats {
            region: region.to_string(),
            avg_latency: mean(&latencies),
            p95_latency: p95(&latencies),
            avg_uptime: mean(&uptimes),
            breaches,
        }
    }
}

/// Compute one [`RegionStats`] per requested region, in request order.
///
/// Duplicate regions produce independent duplicate entries. Regions without
/// matching records report zeroed stats.
pub fn aggregate(
    records: &[TelemetryRecord],
    regions: &[String],
    threshold_ms: f64,
) -> Vec<RegionStats> {
    regions
        .iter()
        .map(|region| {
            let wanted = region.to_lowercase();
            let matching = records.iter().filter(|r| r.in_region(&wanted));
            RegionStats::from_records(region, matching, threshold_ms)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn records(value: Value) -> Vec<TelemetryRecord> {
        serde_json::from_value(value).unwrap()
    }

    fn regions(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_end_to_end_stats() {
        let data = records(json!([
            {"region": "us", "latency_ms": 100, "uptime": 0.99},
            {"region": "us", "latency_ms": 300, "uptime": 0.95},
        ]));

        let stats = aggregate(&data, &regions(&["us"]), 150.0);
        assert_eq!(stats.len(), 1);

        let us = &stats[0];
        assert_eq!(us.region, "us");
        assert_eq!(us.avg_latency, 200.0);
        assert!((us.p95_latency - 290.0).abs() < 1e-9);
        assert!((us.avg_uptime - 97.0).abs() < 1e-9);
        assert_eq!(us.breaches, 1);
    }

    #[test]
    fn test_breaches_strictly_greater() {
        let data = records(json!([
            {"region": "eu", "latency_ms": 100},
            {"region": "eu", "latency_ms": 200},
            {"region": "eu", "latency_ms": 300},
            {"region": "eu", "latency_ms": 180},
        ]));

        let stats = aggregate(&data, &regions(&["eu"]), 180.0);
        assert_eq!(stats[0].breaches, 2);
    }

    #[test]
    fn test_unknown_region_is_zeroed() {
        let data = records(json!([{"region": "us", "latency_ms": 100, "uptime": 0.99}]));

        let stats = aggregate(&data, &regions(&["apac"]), 180.0);
        assert_eq!(
            stats,
            vec![RegionStats {
                region: "apac".to_string(),
                avg_latency: 0.0,
                p95_latency: 0.0,
                avg_uptime: 0.0,
                breaches: 0,
            }]
        );
    }

    #[test]
    fn test_request_order_and_duplicates() {
        let data = records(json!([
            {"region": "US-East", "latency_ms": 120, "uptime": 99.0},
            {"region": "eu-west", "latency_ms": 80, "uptime": 98.0},
        ]));

        let stats = aggregate(&data, &regions(&["eu-west", "us-east", "EU-WEST"]), 100.0);
        let names: Vec<&str> = stats.iter().map(|s| s.region.as_str()).collect();
        assert_eq!(names, vec!["eu-west", "us-east", "EU-WEST"]);

        // Request casing is echoed back, stats are identical
        assert_eq!(stats[0].avg_latency, stats[2].avg_latency);
        assert_eq!(stats[1].avg_latency, 120.0);
        assert_eq!(stats[1].breaches, 1);
        assert_eq!(stats[1].avg_uptime, 99.0);
    }

    #[test]
    fn test_mixed_record_shapes() {
        let data = records(json!([
            {"region": "us", "latency": "110", "availability": "99%"},
            {"region": "us", "ms": 90, "uptime_ratio": 0.97},
            {"region": "us", "latency_ms": "garbage"},
        ]));

        let stats = aggregate(&data, &regions(&["us"]), 100.0);
        let us = &stats[0];
        assert!((us.avg_latency - 200.0 / 3.0).abs() < 1e-9);
        assert!((us.avg_uptime - (99.0 + 97.0) / 3.0).abs() < 1e-9);
        assert_eq!(us.breaches, 1);
    }

    #[test]
    fn test_table_rendering() {
        let response = AnalyticsResponse {
            regions: vec![RegionStats {
                region: "us".to_string(),
                avg_latency: 200.0,
                p95_latency: 290.0,
                avg_uptime: 97.0,
                breaches: 1,
            }],
        };

        let table = response.to_table();
        assert!(table.contains("p95_latency(ms)"));
        assert!(table.contains("290.00"));
    }
}
