//! Dashboard command.

use serde::Serialize;
use tabled::Tabled;

use shopdesk_core::error::AppError;
use shopdesk_entity::time::format_timestamp;
use shopdesk_service::{RecentOrder, TopProduct};

use crate::app::App;
use crate::output::{self, OutputFormat};

/// Recent order display row for table output
#[derive(Debug, Serialize, Tabled)]
struct RecentOrderRow {
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

/// Best seller display row for table output
#[derive(Debug, Serialize, Tabled)]
pub(crate) struct TopProductRow {
    /// Product
    product: String,
    /// Units sold
    units: i64,
    /// Revenue
    revenue: String,
}

pub(crate) fn top_product_rows(app: &App, products: &[TopProduct]) -> Vec<TopProductRow> {
    products
        .iter()
        .map(|p| TopProductRow {
            product: p.name.clone(),
            units: p.units_sold,
            revenue: app.config.dashboard.format_money(p.revenue),
        })
        .collect()
}

fn recent_order_rows(app: &App, orders: &[RecentOrder]) -> Vec<RecentOrderRow> {
    orders
        .iter()
        .map(|o| RecentOrderRow {
            id: o.order_id,
            customer: o.customer.clone(),
            date: format_timestamp(o.placed_at.as_deref()),
            total: app.config.dashboard.format_money(o.total),
            status: o.status.label().to_string(),
        })
        .collect()
}

/// Execute the dashboard command
pub async fn execute(app: &App, format: OutputFormat) -> Result<(), AppError> {
    let ctx = app.admin_context().await?;
    let summary = app.dashboard.summary(&ctx).await?;

    if format == OutputFormat::Json {
        output::print_item(&summary, format);
        return Ok(());
    }

    println!("Welcome, {}", ctx.name);
    output::print_kv("Users", &summary.total_users.to_string());
    output::print_kv("Products", &summary.total_products.to_string());
    output::print_kv("Orders", &summary.total_orders.to_string());
    output::print_kv("Sales", &app.config.dashboard.format_money(summary.total_sales));

    println!("\nRecent orders");
    output::print_list(&recent_order_rows(app, &summary.recent_orders), format);

    println!("\nTop products");
    output::print_list(&top_product_rows(app, &summary.top_products), format);
    Ok(())
}
