//! Base64-over-JSON credential codec.
//!
//! The credential is not signed. Anyone holding the session store can read
//! or forge it, which is why the gate re-checks the live user record.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;

use crate::session::Session;

/// Encodes sessions into opaque credential strings and back.
#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialCodec;

impl CredentialCodec {
    /// Encode a session.
    pub fn encode(session: &Session) -> String {
        // Serializing a struct of plain fields cannot fail.
        let json = serde_json::to_vec(session).unwrap_or_default();
        STANDARD.encode(json)
    }

    /// Decode a credential. Any malformed input yields `None`.
    pub fn decode(credential: &str) -> Option<Session> {
        let bytes = match STANDARD.decode(credential.trim()) {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!(error = %e, "Credential is not valid base64");
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(session) => Some(session),
            Err(e) => {
                debug!(error = %e, "Credential payload is not a session");
                None
            }
        }
    }
}
