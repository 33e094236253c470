//! Dashboard summary.

pub mod service;

pub use service::{DashboardService, DashboardSummary, RecentOrder};
