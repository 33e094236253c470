//! ShopDesk: administrative console for the shop catalog API.
//!
//! Entry point: parses the command line, loads configuration, initializes
//! logging and dispatches the command.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use shopdesk_core::config::AppConfig;

mod app;
mod commands;
mod navigator;
mod output;

use commands::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::debug!(config = %cli.config, api = %config.api.base_url, "Configuration loaded");

    if let Err(e) = cli.execute(config).await {
        output::print_error(&output::describe_error(&e));
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
