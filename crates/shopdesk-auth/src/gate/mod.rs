//! Authentication and authorization.

pub mod access;
pub mod directory;
pub mod error;

pub use access::{AccessGate, LoginResult};
pub use directory::SubjectDirectory;
pub use error::AuthError;
