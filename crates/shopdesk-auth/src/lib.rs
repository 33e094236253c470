//! # shopdesk-auth
//!
//! Session handling and access control for the ShopDesk admin console.
//!
//! ## Modules
//!
//! - `credential`: opaque, reversible encoding of a session
//! - `session`: session and identity models, and their persistence
//! - `gate`: authentication, authorization checks and remote revalidation

pub mod credential;
pub mod gate;
pub mod session;

pub use credential::CredentialCodec;
pub use gate::{AccessGate, AuthError, LoginResult, SubjectDirectory};
pub use session::{Identity, Session, SessionStore};
