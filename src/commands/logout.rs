//! Logout command.

use shopdesk_core::error::AppError;

use crate::app::App;
use crate::output;

/// Execute the logout command
pub async fn execute(app: &App) -> Result<(), AppError> {
    app.gate.logout().await?;
    output::print_success("Logged out.");
    Ok(())
}
