//! # shopdesk-service
//!
//! Admin use cases for ShopDesk. Each service talks to the remote API
//! through a shared [`ResourceClient`](shopdesk_client::ResourceClient) and
//! checks the [`AdminContext`] of the operator before acting.
//!
//! Services follow constructor injection: all dependencies are provided at
//! construction time via `Arc` references.

pub mod catalog;
pub mod context;
pub mod dashboard;
pub mod filter;
pub mod order;
pub mod product;
pub mod report;
pub mod sales;
pub mod user;

pub use context::AdminContext;
pub use dashboard::{DashboardService, DashboardSummary, RecentOrder};
pub use filter::{OrderFilter, ProductFilter, StockFilter, UserFilter, UserStatusFilter};
pub use order::{OrderDetail, OrderLineRow, OrderRow, OrderService};
pub use product::{ProductRow, ProductService};
pub use report::{ReportService, SalesReport};
pub use sales::TopProduct;
pub use user::UserService;
