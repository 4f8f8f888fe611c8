//! # Run Club Directory Server
//!
//! Main entry point for the directory API server.

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use runclub_directory_application::cache::DirectoryCache;
use runclub_directory_domain::CliOverrides;
use runclub_directory_jobs::{CacheSweepJob, JobRunner};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[derive(Parser)]
#[command(name = "runclub-directory")]
#[command(version)]
#[command(about = "Directory API for running clubs, backed by a spreadsheet with local fallback")]
struct Cli {
    /// Path to the TOML config file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// HTTP server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Google Sheet id holding the club listing
    #[arg(long)]
    sheet_id: Option<String>,

    /// Google Sheets API key
    #[arg(long)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind,
        sheet_id: cli.sheet_id,
        api_key: cli.api_key,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        port = config.server.port,
        bind = %config.server.bind_address,
        sheets_configured = config.sheets.is_configured(),
        "Configuration loaded"
    );

    let state = di::build_state(&config)?;
    let shutdown = CancellationToken::new();

    start_jobs(Arc::clone(&state.cache), &config, shutdown.clone()).await;

    let ctrl_c_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received");
            ctrl_c_token.cancel();
        }
    });

    server::start_http_server(&config, state, shutdown).await
}

async fn start_jobs(
    cache: Arc<DirectoryCache>,
    config: &runclub_directory_domain::Config,
    shutdown: CancellationToken,
) {
    JobRunner::new()
        .with_cache_sweep(
            CacheSweepJob::new(cache)
                .with_interval(config.cache.sweep_interval_secs)
                .with_cancellation(shutdown),
        )
        .start()
        .await;
}
