//! Credential encoding.

pub mod codec;

pub use codec::CredentialCodec;
