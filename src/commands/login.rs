//! Login command.

use clap::Args;

use shopdesk_core::error::AppError;

use crate::app::App;
use crate::output;

/// Arguments for the login command
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Administrator email (will prompt if not provided)
    #[arg(short, long)]
    pub email: Option<String>,

    /// Password (will prompt if not provided)
    #[arg(short, long, env = "SHOPDESK_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

/// Execute the login command
pub async fn execute(args: &LoginArgs, app: &App) -> Result<(), AppError> {
    let email = match &args.email {
        Some(e) => e.clone(),
        None => dialoguer::Input::new()
            .with_prompt("Email")
            .interact_text()
            .map_err(|e| AppError::internal(format!("Input error: {}", e)))?,
    };

    let password = match &args.password {
        Some(p) => p.clone(),
        None => dialoguer::Password::new()
            .with_prompt("Password")
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {}", e)))?,
    };

    let result = app.gate.login(&email, &password).await?;
    output::print_success(&format!(
        "Welcome, {}. Logged in as administrator.",
        result.identity.display_name()
    ));
    Ok(())
}
