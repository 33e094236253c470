//! User account status vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account status carried by a user record.
///
/// Only the exact wire values are recognized; anything else is kept in
/// [`UserStatus::Other`] and written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserStatus {
    /// Account is enabled (`activo`).
    Active,
    /// Account is disabled (`inactivo`).
    Inactive,
    /// Any other value.
    Other(String),
}

impl UserStatus {
    /// Check if the account is enabled.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Return the value written to the API.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "activo",
            Self::Inactive => "inactivo",
            Self::Other(raw) => raw,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Other(raw) => raw,
        }
    }
}

impl Default for UserStatus {
    fn default() -> Self {
        Self::Inactive
    }
}

impl From<String> for UserStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "activo" => Self::Active,
            "inactivo" => Self::Inactive,
            _ => Self::Other(raw),
        }
    }
}

impl From<UserStatus> for String {
    fn from(status: UserStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Parses operator input, which may use English names in any case.
impl FromStr for UserStatus {
    type Err = shopdesk_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" | "activo" => Ok(Self::Active),
            "inactive" | "inactivo" => Ok(Self::Inactive),
            _ => Err(shopdesk_core::AppError::validation(format!(
                "Invalid user status: '{s}'. Expected one of: active, inactive"
            ))),
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
