//! SAT Prompt Server Entry Point
//!
//! Initializes logging, loads configuration, warms the prompt catalog and
//! serves it over stdio.

use anyhow::Result;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use sat_prompt_server::core::{Config, SatPromptServer, StdioTransport};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let (config, issues) = Config::from_env();

    init_logging(&config.logging.level);
    for issue in &issues {
        warn!("{}", issue);
    }
    if let Some(dir) = &config.prompts.data_dir {
        info!("Prompt data directory: {:?}", dir);
    }

    info!("Starting {} v{}", config.server.name, config.server.version);

    let server = SatPromptServer::new(config)?;
    server.warm_up().await?;

    StdioTransport::run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout is reserved for MCP messages.
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
        .with_writer(std::io::stderr)
        .init();
}
