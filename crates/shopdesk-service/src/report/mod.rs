//! Sales reports.

pub mod service;

pub use service::{ReportService, SalesReport};
