//! Order administration.

pub mod service;

pub use service::{OrderDetail, OrderLineRow, OrderRow, OrderService};
