//! Configuration management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use shopdesk_client::ResourceClient;
use shopdesk_core::config::AppConfig;
use shopdesk_core::error::AppError;
use shopdesk_core::types::Resource;
use shopdesk_store::StoreManager;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Validate configuration file
    Validate,
    /// List the API endpoints in use
    Endpoints,
    /// Generate a default configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "config/generated.toml")]
        output: String,
    },
}

/// Endpoint display row for table output
#[derive(Debug, Serialize, Tabled)]
struct EndpointRow {
    /// Resource
    resource: String,
    /// URL
    url: String,
}

/// Execute config commands
pub async fn execute(
    args: &ConfigArgs,
    config_path: &str,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            output::print_item(config, format);
        }
        ConfigCommand::Validate => {
            let checked = ResourceClient::new(&config.api)
                .map(|_| ())
                .map_err(AppError::from)
                .and_then(|()| StoreManager::new(&config.session).map(|_| ()));
            match checked {
                Ok(()) => {
                    output::print_success(&format!("Configuration '{}' is valid", config_path));
                    println!("  API: {}", config.api.base_url);
                    println!(
                        "  Session store: {} ({})",
                        config.session.backend, config.session.store_path
                    );
                    println!("  Log level: {}", config.logging.level);
                }
                Err(e) => {
                    output::print_error(&format!("Configuration invalid: {}", e));
                    return Err(e);
                }
            }
        }
        ConfigCommand::Endpoints => {
            let base = config.api.base_url.trim_end_matches('/');
            let rows: Vec<EndpointRow> = Resource::ALL
                .iter()
                .map(|r| EndpointRow {
                    resource: r.to_string(),
                    url: format!("{}{}", base, r.collection_path(&config.api.endpoints)),
                })
                .collect();
            output::print_list(&rows, format);
        }
        ConfigCommand::Generate { output: out_path } => {
            let default_config = include_str!("../../config/default.toml");

            if let Some(parent) = std::path::Path::new(out_path).parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent).await?;
                }
            }
            tokio::fs::write(out_path, default_config).await?;
            output::print_success(&format!("Default configuration written to '{}'", out_path));
        }
    }

    Ok(())
}
