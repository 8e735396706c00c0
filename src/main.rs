//! Flowise MCP Server Entry Point
//!
//! Loads configuration, initializes logging on stderr and serves the Flowise
//! tools over the configured transport.

use anyhow::Result;
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

use flowise_mcp_server::core::{Config, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    init_logging(&config.logging.level);

    if let Err(e) = run(config).await {
        error!("Fatal error running server: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(config: Config) -> flowise_mcp_server::Result<()> {
    info!("Starting {} v{}", config.server.name, config.server.version);
    config.log_summary();

    let server = McpServer::new(config.clone())?;

    TransportService::new(config.transport).run(server).await?;

    info!("Server shutting down");
    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout carries the protocol when serving over stdio.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

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
