//! # shopdesk-core
//!
//! Core crate for the ShopDesk admin console. Contains the unified error
//! system, configuration schemas, the key/value and navigation traits that
//! the session layer is built on, and shared resource/pagination types.
//!
//! This crate has **no** internal dependencies on other ShopDesk crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
