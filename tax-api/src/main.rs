use anyhow::Context;
use clap::Parser;
use tracing::debug;

use tax_api::logging::init_logging;
use tax_api::{AppConfig, Cli, Server};

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(&cli).context("failed to load configuration")?;
    init_logging(&config.log_level)?;
    debug!(?config, "configuration resolved");

    let server = Server::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?
        .with_shutdown_timeout(config.shutdown_timeout);

    server.serve().await;

    Ok(())
}
