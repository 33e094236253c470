//! Order management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use shopdesk_core::error::AppError;
use shopdesk_entity::OrderStatus;
use shopdesk_entity::time::format_timestamp;
use shopdesk_service::OrderFilter;

use crate::app::App;
use crate::output::{self, OutputFormat, cell};

/// Arguments for order commands
#[derive(Debug, Args)]
pub struct OrderArgs {
    /// Order subcommand
    #[command(subcommand)]
    pub command: OrderCommand,
}

/// Order subcommands
#[derive(Debug, Subcommand)]
pub enum OrderCommand {
    /// List orders, newest first
    List {
        /// Search order id and customer name
        #[arg(short, long)]
        search: Option<String>,
        /// Filter by status (all, pending, processing, shipped, delivered)
        #[arg(long)]
        status: Option<String>,
        /// Page number
        #[arg(short, long, default_value_t = 1)]
        page: u64,
    },
    /// Show an order with its lines
    Show {
        /// Order ID
        id: i64,
    },
    /// Change an order's status
    Status {
        /// Order ID
        id: i64,
        /// New status (pending, preparing, shipped, delivered)
        status: OrderStatus,
    },
    /// Delete an order
    Delete {
        /// Order ID
        id: i64,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

/// Order display row for table output
#[derive(Debug, Serialize, Tabled)]
struct OrderTableRow {
    /// Order ID
    id: i64,
    /// Customer
    customer: String,
    /// Date
    date: String,
    /// Total
    total: String,
    /// Status
    status: String,
}

/// Order line display row for table output
#[derive(Debug, Serialize, Tabled)]
struct LineTableRow {
    /// Product
    product: String,
    /// Quantity
    quantity: i64,
    /// Unit price
    unit_price: String,
    /// Subtotal
    subtotal: String,
}

/// Execute order commands
pub async fn execute(args: &OrderArgs, app: &App, format: OutputFormat) -> Result<(), AppError> {
    let ctx = app.admin_context().await?;
    let orders = &app.orders;
    let money = |amount: f64| app.config.dashboard.format_money(amount);

    match &args.command {
        OrderCommand::List {
            search,
            status,
            page,
        } => {
            let filter = OrderFilter {
                search: search.clone(),
                status: status.clone(),
            };
            let result = orders
                .list(&ctx, &filter, &super::page_request(app, *page))
                .await?;
            let rows: Vec<OrderTableRow> = result
                .items
                .iter()
                .map(|row| OrderTableRow {
                    id: row.order.id,
                    customer: row.customer.clone(),
                    date: format_timestamp(row.order.placed_at.as_deref()),
                    total: money(row.order.amount()),
                    status: row.order.status.label().to_string(),
                })
                .collect();
            output::print_page(&result, &rows, format);
        }
        OrderCommand::Show { id } => {
            let detail = orders.detail(&ctx, *id).await?;
            if format == OutputFormat::Json {
                output::print_item(&detail, format);
                return Ok(());
            }

            let order = &detail.order;
            output::print_kv("Order", &order.id.to_string());
            output::print_kv("Customer", &detail.customer_name);
            if let Some(customer) = &detail.customer {
                output::print_kv("Email", &cell(customer.email.as_deref()));
                output::print_kv("Phone", &cell(customer.phone.as_deref()));
            }
            output::print_kv("Date", &format_timestamp(order.placed_at.as_deref()));
            output::print_kv("Status", order.status.label());
            output::print_kv("Shipping address", &cell(order.shipping_address.as_deref()));
            output::print_kv("Total", &money(order.amount()));

            let rows: Vec<LineTableRow> = detail
                .lines
                .iter()
                .map(|l| LineTableRow {
                    product: l.product.clone(),
                    quantity: l.line.units(),
                    unit_price: money(l.line.unit_price.unwrap_or(0.0)),
                    subtotal: money(l.line.amount()),
                })
                .collect();
            println!();
            output::print_list(&rows, format);
        }
        OrderCommand::Status { id, status } => {
            let order = orders.set_status(&ctx, *id, status.clone()).await?;
            output::print_success(&format!(
                "Order {} is now {}",
                order.id,
                order.status.label()
            ));
        }
        OrderCommand::Delete { id, yes } => {
            if super::confirm(&format!("Delete order {}? This cannot be undone", id), *yes)? {
                orders.delete(&ctx, *id).await?;
                output::print_success(&format!("Order {} deleted", id));
            }
        }
    }

    Ok(())
}
