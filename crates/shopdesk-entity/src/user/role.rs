//! User role vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role carried by a user record.
///
/// Only [`UserRole::Administrator`] may use the console. Decoding matches the
/// exact wire value; anything else, including other spellings or casings of
/// the known roles, is kept verbatim in [`UserRole::Other`] and written back
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserRole {
    /// Store administrator (`administrador`).
    Administrator,
    /// Regular shopper (`usuario`).
    Customer,
    /// Any other value.
    Other(String),
}

impl UserRole {
    /// Check if this role may operate the console.
    pub fn is_administrator(&self) -> bool {
        matches!(self, Self::Administrator)
    }

    /// Return the value written to the API.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Administrator => "administrador",
            Self::Customer => "usuario",
            Self::Other(raw) => raw,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &str {
        match self {
            Self::Administrator => "Administrator",
            Self::Customer => "Customer",
            Self::Other(raw) => raw,
        }
    }
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Customer
    }
}

impl From<String> for UserRole {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "administrador" => Self::Administrator,
            "usuario" => Self::Customer,
            _ => Self::Other(raw),
        }
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.as_str().to_string()
    }
}

/// Parses operator input, which may use English names in any case.
impl FromStr for UserRole {
    type Err = shopdesk_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "administrator" | "administrador" | "admin" => Ok(Self::Administrator),
            "customer" | "usuario" => Ok(Self::Customer),
            _ => Err(shopdesk_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: administrator, customer"
            ))),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
