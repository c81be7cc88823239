use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use latency_analytics::{
    processor::{request::AnalyticsRequest, run_analytics},
    settings::Settings,
};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Region to report on; repeat for several regions
    #[arg(long = "region", value_name = "REGION", required = true)]
    pub regions: Vec<String>,

    /// Latency threshold in milliseconds (defaults to the configured value)
    #[arg(long)]
    pub threshold_ms: Option<f64>,

    /// Telemetry dataset, overrides the configured data_file
    #[arg(long, value_name = "FILE")]
    pub data_file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

pub async fn handle(settings: Settings, args: ReportArgs) -> Result<()> {
    let data_file = args.data_file.unwrap_or(settings.data_file);
    let request = AnalyticsRequest::new(
        args.regions,
        args.threshold_ms.unwrap_or(settings.default_threshold_ms),
    );

    let response = tokio::task::spawn_blocking(move || run_analytics(&data_file, &request))
        .await
        .context("report task panicked")?
        .context("Failed to load data file")?;

    match args.format {
        OutputFormat::Table => println!("{}", response.to_table()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
    }

    Ok(())
}
