//! Context carrying the operator performing an admin action.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopdesk_auth::Identity;
use shopdesk_core::error::AppError;
use shopdesk_entity::UserRole;

/// The authenticated operator behind a service call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminContext {
    /// The operator's user id.
    pub user_id: i64,
    /// Display name.
    pub name: String,
    /// Role at the time the session was checked.
    pub role: UserRole,
    /// When the action was requested.
    pub request_time: DateTime<Utc>,
}

impl AdminContext {
    /// Build a context from an authorized identity.
    pub fn from_identity(identity: &Identity) -> Self {
        Self {
            user_id: identity.id,
            name: identity.display_name(),
            role: identity.role.clone(),
            request_time: Utc::now(),
        }
    }

    /// Returns whether the operator is an administrator.
    pub fn is_admin(&self) -> bool {
        self.role.is_administrator()
    }

    /// Fail with an authorization error unless the operator is an administrator.
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::authorization(
                "Access denied: administrator role required",
            ))
        }
    }
}
