//! Payment records.

pub mod model;

pub use model::Payment;
