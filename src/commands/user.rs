//! User management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use shopdesk_core::error::AppError;
use shopdesk_entity::time::format_timestamp;
use shopdesk_entity::{User, UserDraft, UserRole, UserStatus};
use shopdesk_service::{UserFilter, UserStatusFilter};

use crate::app::App;
use crate::output::{self, OutputFormat, cell};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// Editable user fields; omitted fields keep their current value on update
#[derive(Debug, Args)]
pub struct UserFields {
    /// Full name
    #[arg(long)]
    pub name: Option<String>,
    /// Email
    #[arg(long)]
    pub email: Option<String>,
    /// Phone number
    #[arg(long)]
    pub phone: Option<String>,
    /// Address
    #[arg(long)]
    pub address: Option<String>,
    /// Role (administrator, customer)
    #[arg(long)]
    pub role: Option<UserRole>,
    /// Status (active, inactive)
    #[arg(long)]
    pub status: Option<UserStatus>,
    /// Password (required on create, prompted if missing)
    #[arg(long)]
    pub password: Option<String>,
    /// Profile picture URL
    #[arg(long)]
    pub photo: Option<String>,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List users
    List {
        /// Search name, email, phone, role and address
        #[arg(short, long)]
        search: Option<String>,
        /// Filter by status (all, active, inactive)
        #[arg(long, default_value = "all")]
        status: UserStatusFilter,
        /// Page number
        #[arg(short, long, default_value_t = 1)]
        page: u64,
    },
    /// Show one user
    Show {
        /// User ID
        id: i64,
    },
    /// Create a user
    Create(UserFields),
    /// Update a user
    Update {
        /// User ID
        id: i64,
        /// New values
        #[command(flatten)]
        fields: UserFields,
    },
    /// Activate a user
    Activate {
        /// User ID
        id: i64,
    },
    /// Deactivate a user
    Deactivate {
        /// User ID
        id: i64,
    },
    /// Delete a user
    Delete {
        /// User ID
        id: i64,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Show a user's orders
    Orders {
        /// User ID
        id: i64,
    },
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    /// User ID
    id: i64,
    /// Name
    name: String,
    /// Email
    email: String,
    /// Phone
    phone: String,
    /// Role
    role: String,
    /// Status
    status: String,
    /// Registered
    registered: String,
}

impl From<&User> for UserRow {
    fn from(u: &User) -> Self {
        Self {
            id: u.id,
            name: u.display_name(),
            email: cell(u.email.as_deref()),
            phone: cell(u.phone.as_deref()),
            role: u.role.label().to_string(),
            status: u.status.label().to_string(),
            registered: format_timestamp(u.registered_at.as_deref()),
        }
    }
}

/// Purchase display row for table output
#[derive(Debug, Serialize, Tabled)]
struct PurchaseRow {
    /// Order ID
    id: i64,
    /// Date
    date: String,
    /// Total
    total: String,
    /// Status
    status: String,
}

fn draft_for_create(fields: &UserFields) -> Result<UserDraft, AppError> {
    let required = |value: &Option<String>, prompt: &str| -> Result<String, AppError> {
        match value {
            Some(v) => Ok(v.clone()),
            None => dialoguer::Input::new()
                .with_prompt(prompt)
                .interact_text()
                .map_err(|e| AppError::internal(format!("Input error: {}", e))),
        }
    };

    let secret = match &fields.password {
        Some(p) => p.clone(),
        None => dialoguer::Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {}", e)))?,
    };

    Ok(UserDraft {
        name: required(&fields.name, "Name")?,
        email: required(&fields.email, "Email")?,
        phone: fields.phone.clone().unwrap_or_default(),
        address: fields.address.clone().unwrap_or_default(),
        role: fields.role.clone().unwrap_or_default(),
        status: fields.status.clone().unwrap_or(UserStatus::Active),
        secret: Some(secret),
        photo: fields.photo.clone().unwrap_or_default(),
    })
}

fn draft_for_update(current: &User, fields: &UserFields) -> UserDraft {
    let keep = |new: &Option<String>, old: &Option<String>| {
        new.clone().or_else(|| old.clone()).unwrap_or_default()
    };
    UserDraft {
        name: keep(&fields.name, &current.name),
        email: keep(&fields.email, &current.email),
        phone: keep(&fields.phone, &current.phone),
        address: keep(&fields.address, &current.address),
        role: fields.role.clone().unwrap_or_else(|| current.role.clone()),
        status: fields.status.clone().unwrap_or_else(|| current.status.clone()),
        secret: fields.password.clone(),
        photo: keep(&fields.photo, &current.photo),
    }
}

/// Execute user commands
pub async fn execute(args: &UserArgs, app: &App, format: OutputFormat) -> Result<(), AppError> {
    let ctx = app.admin_context().await?;
    let users = &app.users;

    match &args.command {
        UserCommand::List {
            search,
            status,
            page,
        } => {
            let filter = UserFilter {
                search: search.clone(),
                status: *status,
            };
            let result = users
                .list(&ctx, &filter, &super::page_request(app, *page))
                .await?;
            let rows: Vec<UserRow> = result.items.iter().map(UserRow::from).collect();
            output::print_page(&result, &rows, format);
        }
        UserCommand::Show { id } => {
            let user = users.get(&ctx, *id).await?;
            match format {
                OutputFormat::Json => output::print_item(&user, format),
                OutputFormat::Table => {
                    let row = UserRow::from(&user);
                    output::print_kv("Id", &row.id.to_string());
                    output::print_kv("Name", &row.name);
                    output::print_kv("Email", &row.email);
                    output::print_kv("Phone", &row.phone);
                    output::print_kv("Address", &cell(user.address.as_deref()));
                    output::print_kv("Role", &row.role);
                    output::print_kv("Status", &row.status);
                    output::print_kv("Registered", &row.registered);
                }
            }
        }
        UserCommand::Create(fields) => {
            let draft = draft_for_create(fields)?;
            let email = draft.email.clone();
            match users.create(&ctx, draft).await? {
                Some(user) => {
                    output::print_success(&format!("User '{}' created (id: {})", email, user.id))
                }
                None => output::print_success(&format!("User '{}' created", email)),
            }
        }
        UserCommand::Update { id, fields } => {
            let current = users.get(&ctx, *id).await?;
            let user = users
                .update(&ctx, *id, draft_for_update(&current, fields))
                .await?;
            output::print_success(&format!("User '{}' updated", user.display_name()));
        }
        UserCommand::Activate { id } => {
            let user = users.activate(&ctx, *id).await?;
            output::print_success(&format!("User '{}' activated", user.display_name()));
        }
        UserCommand::Deactivate { id } => {
            let user = users.deactivate(&ctx, *id).await?;
            output::print_success(&format!("User '{}' deactivated", user.display_name()));
        }
        UserCommand::Delete { id, yes } => {
            if super::confirm(&format!("Delete user {}? This cannot be undone", id), *yes)? {
                users.delete(&ctx, *id).await?;
                output::print_success(&format!("User {} deleted", id));
            }
        }
        UserCommand::Orders { id } => {
            let orders = users.purchase_history(&ctx, *id).await?;
            let rows: Vec<PurchaseRow> = orders
                .iter()
                .map(|o| PurchaseRow {
                    id: o.id,
                    date: format_timestamp(o.placed_at.as_deref()),
                    total: app.config.dashboard.format_money(o.amount()),
                    status: o.status.label().to_string(),
                })
                .collect();
            output::print_list(&rows, format);
        }
    }

    Ok(())
}
