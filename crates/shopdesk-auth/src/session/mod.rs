//! Session lifecycle: models and persistence.

pub mod model;
pub mod store;

pub use model::{Identity, Session};
pub use store::SessionStore;
