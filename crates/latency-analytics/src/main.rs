mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use latency_analytics::settings::Settings;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "latency-analytics",
    about = "Per-region latency and uptime analytics over a telemetry dataset",
    version,
    author,
    after_help = r#"Configuration:
    Configuration can be provided via:
    1. Environment variables with ANALYTICS__ prefix (e.g., ANALYTICS__DATA_FILE)
    2. .env file in the current directory
    3. Config file with -c option (see example.config.toml)

Examples:
    # Serve the analytics endpoint
    latency-analytics serve --listen 0.0.0.0:8080 --data-file telemetry.json

    # One-off report for two regions
    latency-analytics report --region apac --region emea --threshold-ms 170"#
)]
pub struct Cli {
    /// Path to the configuration file (TOML format)
    ///
    /// If not provided, will attempt to load from environment variables
    #[clap(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP analytics endpoint
    Serve(cli::serve::ServeArgs),
    /// Aggregate the dataset once and print the result
    Report(cli::report::ReportArgs),
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let settings = if let Some(config_path) = &self.config {
            Settings::from_path(config_path)?
        } else {
            Settings::from_env()?
        };
        init_logging(&settings.log_level)?;

        match self.command {
            Commands::Serve(args) => cli::serve::handle(settings, args).await,
            Commands::Report(args) => cli::report::handle(settings, args).await,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run().await
}

fn init_logging(log_level: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false),
        )
        .init();

    Ok(())
}
