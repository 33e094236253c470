//! # shopdesk-client
//!
//! Typed fetch/decode cycles against the remote CRUD API.
//!
//! ## Modules
//!
//! - `client`: `ResourceClient`, the reqwest-backed request/decode loop
//! - `error`: `ClientError`, the transport and decoding error taxonomy
//! - `cause`: classification of transport failures into a `LikelyCause`
//! - `origin`: cross-origin acceptance check for configured client origins

pub mod cause;
pub mod client;
pub mod error;
pub mod origin;

pub use cause::{LikelyCause, classify_transport_failure};
pub use client::ResourceClient;
pub use error::ClientError;
pub use reqwest::Method;
