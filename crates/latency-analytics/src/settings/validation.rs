use crate::{server::HEALTH_PATH, settings::Settings};
use anyhow::{Result, bail};

/// Validate the configuration values
pub fn validate_config(settings: &Settings) -> Result<()> {
    if !settings.endpoint_path.starts_with('/') {
        bail!(
            "endpoint_path must start with '/', got {:?}",
            settings.endpoint_path
        );
    }

    if settings.endpoint_path == HEALTH_PATH {
        bail!("endpoint_path must not shadow the health route {HEALTH_PATH}");
    }

    if !settings.default_threshold_ms.is_finite() || settings.default_threshold_ms < 0.0 {
        bail!(
            "default_threshold_ms must be a non-negative number, got {}",
            settings.default_threshold_ms
        );
    }

    if settings.data_file.as_os_str().is_empty() {
        bail!("data_file must not be empty");
    }

    if settings.max_body_bytes == 0 {
        bail!("max_body_bytes must be greater than zero");
    }

    if let Some(metrics) = &settings.metrics {
        if metrics.addr == settings.listen_addr {
            bail!("metrics addr {} collides with listen_addr", metrics.addr);
        }
    }

    Ok(())
}
