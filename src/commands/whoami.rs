//! Whoami command.

use clap::Args;

use shopdesk_core::error::AppError;

use crate::app::App;
use crate::output::{self, OutputFormat};

/// Arguments for the whoami command
#[derive(Debug, Args)]
pub struct WhoamiArgs {
    /// Re-check role and status against the API
    #[arg(long)]
    pub refresh: bool,
}

/// Execute the whoami command
pub async fn execute(args: &WhoamiArgs, app: &App, format: OutputFormat) -> Result<(), AppError> {
    let identity = if args.refresh {
        app.gate.authorize().await?
    } else {
        app.gate.authorized_identity().await?
    };
    let session = app.gate.sessions().credential().await;

    match format {
        OutputFormat::Json => output::print_item(&identity, format),
        OutputFormat::Table => {
            output::print_kv("User", &identity.display_name());
            output::print_kv("Id", &identity.id.to_string());
            output::print_kv("Email", &output::cell(identity.email.as_deref()));
            output::print_kv("Role", identity.role.label());
            output::print_kv("Status", identity.status.label());
            if let Some(session) = session {
                output::print_kv(
                    "Logged in at",
                    &session.issued_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
                );
            }
        }
    }
    Ok(())
}
