//! Sales report command.

use shopdesk_core::error::AppError;

use crate::app::App;
use crate::output::{self, OutputFormat};

/// Execute the report command
pub async fn execute(app: &App, format: OutputFormat) -> Result<(), AppError> {
    let ctx = app.admin_context().await?;
    let report = app.reports.generate(&ctx).await?;

    if format == OutputFormat::Json {
        output::print_item(&report, format);
        return Ok(());
    }

    let money = |amount: f64| app.config.dashboard.format_money(amount);
    output::print_kv(
        "Generated at",
        &report.generated_at.format("%Y-%m-%d %H:%M UTC").to_string(),
    );
    output::print_kv("Total sales", &money(report.total_sales));
    output::print_kv("Total orders", &report.total_orders.to_string());
    output::print_kv("Active users", &report.active_users.to_string());
    output::print_kv("Total products", &report.total_products.to_string());

    println!("\nTop products");
    output::print_list(
        &super::dashboard::top_product_rows(app, &report.top_products),
        format,
    );
    Ok(())
}
