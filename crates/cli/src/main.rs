//! # Rescue Dogs MCP Server
//!
//! Stdio tool server over the rescuedogs.me API. Stdout carries protocol
//! traffic only; logs go to stderr.

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use rescuedogs_mcp_domain::CliOverrides;
use rescuedogs_mcp_jobs::{CacheSweepJob, JobRunner};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "rescuedogs-mcp")]
#[command(version)]
#[command(about = "MCP server for finding rescue dogs on rescuedogs.me")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Base URL of the rescue dogs API
    #[arg(long)]
    api_url: Option<String>,

    /// Base URL of the image CDN
    #[arg(long)]
    image_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,
}

/// Grace period for in-flight work at exit. A pending stdin read would
/// otherwise keep the runtime alive after Ctrl+C.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(1);

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(run(cli));
    runtime.shutdown_timeout(SHUTDOWN_GRACE);
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let overrides = CliOverrides {
        api_url: cli.api_url,
        image_url: cli.image_url,
        log_level: cli.log_level,
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting rescue dogs MCP server");
    bootstrap::log_config(cli.config.as_deref(), &config);

    let services = di::Services::new(&config)?;

    let shutdown = CancellationToken::new();
    JobRunner::new()
        .with_cache_sweep(
            CacheSweepJob::new(services.cache.clone())
                .with_interval(config.cache.sweep_interval_secs)
                .with_cancellation(shutdown.clone()),
        )
        .start()
        .await;

    let result = server::start_stdio_server(Arc::clone(&services.server), shutdown.clone()).await;

    shutdown.cancel();
    info!("Server stopped");
    result
}
