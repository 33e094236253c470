//! # shopdesk-store
//!
//! Key/value backends for the persisted admin session. Supports two modes:
//!
//! - **file**: a single JSON object on disk, surviving between invocations
//! - **memory**: an in-process map using [dashmap](https://crates.io/crates/dashmap),
//!   for tests and embedding
//!
//! The backend is selected at runtime based on configuration.

#[cfg(feature = "file")]
pub mod file;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;

pub use provider::StoreManager;
