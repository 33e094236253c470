//! Product administration.

pub mod service;

pub use service::{ProductRow, ProductService};
