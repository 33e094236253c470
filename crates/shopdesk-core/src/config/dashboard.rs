//! Dashboard and listing presentation settings.

use serde::{Deserialize, Serialize};

/// Settings for dashboard summaries and paged listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Rows per page in listings.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    /// Number of most recent orders shown on the dashboard.
    #[serde(default = "default_top_n")]
    pub recent_orders_limit: usize,
    /// Number of best-selling products shown on dashboard and reports.
    #[serde(default = "default_top_n")]
    pub top_products_limit: usize,
    /// ISO currency code.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Symbol prefixed to money amounts.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            recent_orders_limit: default_top_n(),
            top_products_limit: default_top_n(),
            currency: default_currency(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl DashboardConfig {
    /// Formats an amount with the configured currency symbol.
    pub fn format_money(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency_symbol, amount)
    }
}

fn default_page_size() -> u64 {
    10
}

fn default_top_n() -> usize {
    5
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}
