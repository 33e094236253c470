//! Authentication errors.

use shopdesk_client::ClientError;
use shopdesk_core::error::{AppError, ErrorKind};
use thiserror::Error;

/// Why a login or a session check was refused.
///
/// The authentication variants carry the message shown to the operator.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Email or secret left blank.
    #[error("Please enter {0}")]
    MissingInput(&'static str),
    /// No user has the given email.
    #[error("No user found with that email")]
    NotFound,
    /// The secret does not match.
    #[error("Incorrect password")]
    InvalidCredential,
    /// The user is not an administrator.
    #[error("Access denied: administrator role required")]
    InsufficientRole,
    /// The user account is disabled.
    #[error("Account is inactive")]
    AccountInactive,
    /// No session is stored.
    #[error("Not logged in")]
    NotAuthenticated,
    /// The stored session is older than the configured limit.
    #[error("Session expired, please log in again")]
    Expired,
    /// The user directory could not be consulted.
    #[error(transparent)]
    Remote(#[from] ClientError),
    /// The session could not be persisted.
    #[error("Failed to store session: {0}")]
    Storage(String),
}

impl AuthError {
    /// Whether this error is a verdict about the subject, as opposed to a
    /// failure to reach a verdict.
    pub fn is_denial(&self) -> bool {
        matches!(
            self,
            Self::NotFound
                | Self::InvalidCredential
                | Self::InsufficientRole
                | Self::AccountInactive
                | Self::NotAuthenticated
                | Self::Expired
        )
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        Self::Storage(err.message)
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        let kind = match &err {
            AuthError::Remote(e) => return AppError::from(e.clone()),
            AuthError::MissingInput(_) => ErrorKind::Validation,
            AuthError::NotFound => ErrorKind::NotFound,
            AuthError::InvalidCredential | AuthError::NotAuthenticated | AuthError::Expired => {
                ErrorKind::Authentication
            }
            AuthError::InsufficientRole | AuthError::AccountInactive => ErrorKind::Authorization,
            AuthError::Storage(_) => ErrorKind::Storage,
        };
        AppError::new(kind, err.to_string())
    }
}
