// Field holding the region identifier of a record
pub const REGION_KEY: &str = "region";

// Latency aliases, highest priority first
pub const LATENCY_KEYS: [&str; 3] = ["latency_ms", "latency", "ms"];

// Uptime aliases, highest priority first
pub const UPTIME_KEYS: [&str; 10] = [
    "uptime",
    "uptime_pct",
    "uptime_percent",
    "uptime_percentage",
    "availability",
    "availability_pct",
    "availability_percent",
    "uptime_ratio",
    "uptimeRatio",
    "up",
];

// Uptime values in [0, 1.5] are read as ratios and scaled to percent
pub const UPTIME_RATIO_CEILING: f64 = 1.5;

pub const P95_QUANTILE: f64 = 0.95;

pub const DEFAULT_THRESHOLD_MS: f64 = 180.0;
