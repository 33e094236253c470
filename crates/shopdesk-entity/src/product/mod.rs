//! Product records.

pub mod model;

pub use model::{Product, ProductDraft};
