//! MCP Server Entry Point
//!
//! Parses configuration from flags and environment, initializes logging,
//! and serves the Sentry tools over stdio.

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

use sentry_mcp_server::core::{Args, Config, McpServer, StdioTransport};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::load();

    // Initialize logging
    init_logging(&args.log_level);

    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return Err(e.into());
        }
    };

    info!("Starting {} v{}", config.server.name, config.server.version);

    let server = McpServer::new(config)?;

    info!("Server initialized");

    StdioTransport::run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// `RUST_LOG` takes precedence over the configured level. Output goes to
/// stderr so stdout stays reserved for protocol messages.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();
}
