pub mod validation;

use crate::processor::constants::DEFAULT_THRESHOLD_MS;
use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::{fmt, net::SocketAddr, path::Path, path::PathBuf};
use validation::validate_config;

/// Main settings configuration for latency-analytics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Log level for application logging (e.g., "info", "debug", "warn", "error")
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Address the HTTP listener binds to
    #[serde(default = "default_listen_addr")]
    pub listen_addr: SocketAddr,
    /// Route serving the analytics endpoint (POST and OPTIONS)
    #[serde(default = "default_endpoint_path")]
    pub endpoint_path: String,
    /// Telemetry dataset, re-read on every request
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// Breach threshold used when a request omits `threshold_ms`
    #[serde(default = "default_threshold_ms")]
    pub default_threshold_ms: f64,
    /// Largest accepted request body in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
    /// Prometheus exporter (optional)
    #[serde(default)]
    pub metrics: Option<MetricsSettings>,
}

/// Prometheus scrape endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSettings {
    pub addr: SocketAddr,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

fn default_endpoint_path() -> String {
    "/api/analytics".to_string()
}

fn default_data_file() -> PathBuf {
    PathBuf::from("q-vercel-latency.json")
}

fn default_threshold_ms() -> f64 {
    DEFAULT_THRESHOLD_MS
}

fn default_max_body_bytes() -> usize {
    1024 * 1024
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            listen_addr: default_listen_addr(),
            endpoint_path: default_endpoint_path(),
            data_file: default_data_file(),
            default_threshold_ms: default_threshold_ms(),
            max_body_bytes: default_max_body_bytes(),
            metrics: None,
        }
    }
}

impl Settings {
    /// Load configuration from a specific config file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        // Construct settings, env vars take priority still
        let settings = ConfigBuilder::builder()
            .add_source(File::with_name(&path.as_ref().to_string_lossy()))
            .add_source(
                Environment::with_prefix("ANALYTICS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        validate_config(&settings)?;

        Ok(settings)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // NOTE: It's ok if this fails (file might not exist)
        let _ = dotenvy::dotenv();

        let settings: Settings = ConfigBuilder::builder()
            .add_source(
                Environment::with_prefix("ANALYTICS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        validate_config(&settings)?;

        Ok(settings)
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Settings {{\n\
             \tLog Level: {}\n\
             \tListen Addr: {}\n\
             \tEndpoint Path: {}\n\
             \tData File: {}\n\
             \tDefault Threshold (ms): {}\n\
             \tMax Body Bytes: {}\n\
             \tMetrics Addr: {}\n\
             }}",
            self.log_level,
            self.listen_addr,
            self.endpoint_path,
            self.data_file.display(),
            self.default_threshold_ms,
            self.max_body_bytes,
            self.metrics
                .as_ref()
                .map(|m| m.addr.to_string())
                .unwrap_or_else(|| "disabled".to_string()),
        )
    }
}
