//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use shopdesk_core::error::{AppError, ErrorKind};
use shopdesk_core::types::PageResponse;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                let table = Table::new(items).to_string();
                println!("{}", table);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string());
            println!("{}", json);
        }
    }
}

/// Print one page of a listing: the rows, then the page position.
///
/// In JSON mode the whole page, including the source items, is printed.
pub fn print_page<T, R>(page: &PageResponse<T>, rows: &[R], format: OutputFormat)
where
    T: Serialize + std::fmt::Debug,
    R: Serialize + Tabled,
{
    match format {
        OutputFormat::Table => {
            print_list(rows, format);
            println!(
                "Page {} of {} ({} total)",
                page.page, page.total_pages, page.total_items
            );
        }
        OutputFormat::Json => print_item(page, format),
    }
}

/// Print a single item in the selected format
pub fn print_item<T: Serialize + std::fmt::Debug>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            println!("{:#?}", item);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string());
            println!("{}", json);
        }
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    eprintln!("⚠ {}", msg);
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {}", msg);
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{}:", key), value);
}

/// Operator-facing text for an error.
///
/// Login and validation problems are shown as-is; transport problems get a
/// prefix saying the API is the issue.
pub fn describe_error(err: &AppError) -> String {
    match err.kind {
        ErrorKind::Connectivity => err.message.clone(),
        ErrorKind::RemoteRequest => format!("The API rejected the request. {}", err.message),
        ErrorKind::Authentication
        | ErrorKind::Authorization
        | ErrorKind::Validation
        | ErrorKind::NotFound => err.message.clone(),
        _ => err.to_string(),
    }
}

/// Render an optional string cell.
pub fn cell(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}
