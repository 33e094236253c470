//! Core type definitions used across the ShopDesk workspace.

pub mod pagination;
pub mod resource;

pub use pagination::{PageRequest, PageResponse};
pub use resource::Resource;
