//! CLI command definitions and dispatch.

pub mod config;
pub mod dashboard;
pub mod login;
pub mod logout;
pub mod order;
pub mod product;
pub mod report;
pub mod user;
pub mod whoami;

use clap::{Parser, Subcommand};

use shopdesk_core::config::AppConfig;
use shopdesk_core::error::AppError;
use shopdesk_core::types::PageRequest;

use crate::app::App;
use crate::output::OutputFormat;

/// ShopDesk: administrative console for the shop catalog API
#[derive(Debug, Parser)]
#[command(name = "shopdesk", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml", env = "SHOPDESK_CONFIG")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log in as an administrator
    Login(login::LoginArgs),
    /// End the current session
    Logout,
    /// Show the logged-in administrator
    Whoami(whoami::WhoamiArgs),
    /// Totals, latest orders and best sellers
    Dashboard,
    /// Sales report
    Report,
    /// User administration
    User(user::UserArgs),
    /// Product administration
    Product(product::ProductArgs),
    /// Order administration
    Order(order::OrderArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        if let Commands::Config(args) = &self.command {
            return config::execute(args, &self.config, &config, self.format).await;
        }

        let app = App::build(config)?;
        match &self.command {
            Commands::Login(args) => login::execute(args, &app).await,
            Commands::Logout => logout::execute(&app).await,
            Commands::Whoami(args) => whoami::execute(args, &app, self.format).await,
            Commands::Dashboard => dashboard::execute(&app, self.format).await,
            Commands::Report => report::execute(&app, self.format).await,
            Commands::User(args) => user::execute(args, &app, self.format).await,
            Commands::Product(args) => product::execute(args, &app, self.format).await,
            Commands::Order(args) => order::execute(args, &app, self.format).await,
            Commands::Config(_) => Ok(()),
        }
    }
}

/// Helper: page request for a 1-based page number using the configured size
pub fn page_request(app: &App, page: u64) -> PageRequest {
    PageRequest::new(page, app.config.dashboard.page_size)
}

/// Helper: ask before a destructive action unless `--yes` was given
pub fn confirm(prompt: &str, assume_yes: bool) -> Result<bool, AppError> {
    if assume_yes {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {}", e)))?;
    if !confirmed {
        println!("Cancelled.");
    }
    Ok(confirmed)
}
