//! Core traits defined in `shopdesk-core` and implemented by other crates.

pub mod key_value;
pub mod navigator;

pub use key_value::KeyValueStore;
pub use navigator::Navigator;
