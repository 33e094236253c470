//! Remote resource client errors.

use shopdesk_core::error::{AppError, ErrorKind};
use thiserror::Error;

use crate::cause::LikelyCause;

/// Everything that can go wrong between issuing a request and holding a
/// decoded value.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// The API answered with a non-success status.
    #[error("Request failed: {status} {status_text}")]
    RemoteRequestFailed {
        /// HTTP status code.
        status: u16,
        /// Reason phrase, or empty when the status has none.
        status_text: String,
    },
    /// No HTTP response was received, or the cross-origin check rejected it.
    #[error("Cannot reach the API: {likely_cause}")]
    Connectivity {
        /// Classified cause.
        likely_cause: LikelyCause,
        /// Low-level detail for logs.
        detail: String,
    },
    /// The response body did not match the expected shape.
    #[error("Failed to decode response from {endpoint}: {message}")]
    Decode {
        /// Request path.
        endpoint: String,
        /// Decoder message.
        message: String,
    },
    /// The configured base URL and path do not form a valid URL.
    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl {
        /// The offending URL.
        url: String,
        /// Parser message.
        message: String,
    },
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Setup(String),
}

impl ClientError {
    /// HTTP status for `RemoteRequestFailed`.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RemoteRequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the API reported the item as missing.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        let kind = match &err {
            ClientError::RemoteRequestFailed { status: 404, .. } => ErrorKind::NotFound,
            ClientError::RemoteRequestFailed { .. } => ErrorKind::RemoteRequest,
            ClientError::Connectivity { .. } => ErrorKind::Connectivity,
            ClientError::Decode { .. } => ErrorKind::Serialization,
            ClientError::InvalidUrl { .. } | ClientError::Setup(_) => ErrorKind::Configuration,
        };
        AppError::with_source(kind, err.to_string(), err)
    }
}
