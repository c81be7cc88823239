use anyhow::Result;
use clap::Args;
use latency_analytics::{
    instrumentation::{export_build_info, install_prometheus},
    server,
    settings::{Settings, validation::validate_config},
};
use std::{net::SocketAddr, path::PathBuf};
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to listen on, overrides the configured listen_addr
    #[arg(long, value_name = "ADDR")]
    pub listen: Option<SocketAddr>,

    /// Telemetry dataset, overrides the configured data_file
    #[arg(long, value_name = "FILE")]
    pub data_file: Option<PathBuf>,
}

pub async fn handle(mut settings: Settings, args: ServeArgs) -> Result<()> {
    if let Some(listen) = args.listen {
        settings.listen_addr = listen;
    }
    if let Some(data_file) = args.data_file {
        settings.data_file = data_file;
    }
    validate_config(&settings)?;

    if let Some(metrics) = &settings.metrics {
        install_prometheus(metrics.addr)?;
        export_build_info();
    }

    info!("{settings}");

    let shutdown = shutdown_listener();
    server::serve(&settings, shutdown).await?;

    info!("latency analytics shutting down");
    Ok(())
}

fn shutdown_listener() -> CancellationToken {
    let cancellation_token = CancellationToken::new();
    let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())
        .expect("sigterm listener failed");
    tokio::spawn({
        let cancellation_token = cancellation_token.clone();
        async move {
            tokio::select! {
                _ = sigterm.recv() => cancellation_token.cancel(),
                _ = signal::ctrl_c() => cancellation_token.cancel(),
            }
        }
    });

    cancellation_token
}
