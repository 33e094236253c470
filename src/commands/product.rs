//! Product management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use shopdesk_core::error::AppError;
use shopdesk_entity::{Product, ProductDraft};
use shopdesk_service::{ProductFilter, ProductRow, StockFilter};

use crate::app::App;
use crate::output::{self, OutputFormat, cell};

/// Arguments for product commands
#[derive(Debug, Args)]
pub struct ProductArgs {
    /// Product subcommand
    #[command(subcommand)]
    pub command: ProductCommand,
}

/// Editable product fields; omitted fields keep their current value on update
#[derive(Debug, Args)]
pub struct ProductFields {
    /// Product name
    #[arg(long)]
    pub name: Option<String>,
    /// Description
    #[arg(long)]
    pub description: Option<String>,
    /// Unit price
    #[arg(long)]
    pub price: Option<f64>,
    /// Units in stock
    #[arg(long)]
    pub stock: Option<i64>,
    /// Image URL
    #[arg(long)]
    pub image: Option<String>,
}

/// Product subcommands
#[derive(Debug, Subcommand)]
pub enum ProductCommand {
    /// List products with units sold
    List {
        /// Search name and description
        #[arg(short, long)]
        search: Option<String>,
        /// Filter by stock (all, in-stock, out-of-stock)
        #[arg(long, default_value = "all")]
        stock: StockFilter,
        /// Page number
        #[arg(short, long, default_value_t = 1)]
        page: u64,
    },
    /// Show one product
    Show {
        /// Product ID
        id: i64,
    },
    /// Create a product
    Create {
        /// Product name
        #[arg(long)]
        name: String,
        /// Description
        #[arg(long, default_value = "")]
        description: String,
        /// Unit price
        #[arg(long)]
        price: f64,
        /// Units in stock
        #[arg(long, default_value_t = 0)]
        stock: i64,
        /// Image URL
        #[arg(long)]
        image: Option<String>,
    },
    /// Update a product
    Update {
        /// Product ID
        id: i64,
        /// New values
        #[command(flatten)]
        fields: ProductFields,
    },
    /// Delete a product
    Delete {
        /// Product ID
        id: i64,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

/// Product display row for table output
#[derive(Debug, Serialize, Tabled)]
struct ProductTableRow {
    /// Product ID
    id: i64,
    /// Name
    name: String,
    /// Price
    price: String,
    /// Stock
    stock: i64,
    /// Units sold
    sold: i64,
    /// Category
    category: String,
}

fn draft_for_update(current: &Product, fields: &ProductFields) -> ProductDraft {
    ProductDraft {
        name: fields.name.clone().unwrap_or_else(|| current.display_name()),
        description: fields
            .description
            .clone()
            .or_else(|| current.description.clone())
            .unwrap_or_default(),
        price: fields.price.unwrap_or(current.price),
        stock: fields.stock.unwrap_or(current.stock),
        image: fields.image.clone().unwrap_or_default(),
        category: current.category.clone().unwrap_or_default(),
        status: current.status.clone().unwrap_or_default(),
    }
}

/// Execute product commands
pub async fn execute(args: &ProductArgs, app: &App, format: OutputFormat) -> Result<(), AppError> {
    let ctx = app.admin_context().await?;
    let products = &app.products;
    let money = |amount: f64| app.config.dashboard.format_money(amount);

    match &args.command {
        ProductCommand::List {
            search,
            stock,
            page,
        } => {
            let filter = ProductFilter {
                search: search.clone(),
                stock: *stock,
            };
            let result = products
                .list(&ctx, &filter, &super::page_request(app, *page))
                .await?;
            let rows: Vec<ProductTableRow> = result
                .items
                .iter()
                .map(|ProductRow { product, units_sold }| ProductTableRow {
                    id: product.id,
                    name: product.display_name(),
                    price: money(product.price),
                    stock: product.stock,
                    sold: *units_sold,
                    category: cell(product.category.as_deref()),
                })
                .collect();
            output::print_page(&result, &rows, format);
        }
        ProductCommand::Show { id } => {
            let product = products.get(&ctx, *id).await?;
            match format {
                OutputFormat::Json => output::print_item(&product, format),
                OutputFormat::Table => {
                    output::print_kv("Id", &product.id.to_string());
                    output::print_kv("Name", &product.display_name());
                    output::print_kv("Description", &cell(product.description.as_deref()));
                    output::print_kv("Price", &money(product.price));
                    output::print_kv("Stock", &product.stock.to_string());
                    output::print_kv("Category", &cell(product.category.as_deref()));
                    output::print_kv("Image", &cell(product.image.as_deref()));
                    output::print_kv("Status", &cell(product.status.as_deref()));
                }
            }
        }
        ProductCommand::Create {
            name,
            description,
            price,
            stock,
            image,
        } => {
            let mut draft = ProductDraft::new(name.clone(), description.clone(), *price, *stock);
            draft.image = image.clone().unwrap_or_default();
            match products.create(&ctx, draft).await? {
                Some(product) => output::print_success(&format!(
                    "Product '{}' created (id: {})",
                    name, product.id
                )),
                None => output::print_success(&format!("Product '{}' created", name)),
            }
        }
        ProductCommand::Update { id, fields } => {
            let current = products.get(&ctx, *id).await?;
            let product = products
                .update(&ctx, *id, draft_for_update(&current, fields))
                .await?;
            output::print_success(&format!("Product '{}' updated", product.display_name()));
        }
        ProductCommand::Delete { id, yes } => {
            if super::confirm(&format!("Delete product {}? This cannot be undone", id), *yes)? {
                products.delete(&ctx, *id).await?;
                output::print_success(&format!("Product {} deleted", id));
            }
        }
    }

    Ok(())
}
