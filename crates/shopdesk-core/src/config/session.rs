//! Session persistence configuration.

use serde::{Deserialize, Serialize};

/// Where and how the admin session is kept between invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Store backend: `"file"` or `"memory"`.
    #[serde(default = "default_backend")]
    pub backend: String,
    /// Path of the JSON file backing the session store.
    #[serde(default = "default_store_path")]
    pub store_path: String,
    /// Key holding the encoded credential.
    #[serde(default = "default_token_key")]
    pub token_key: String,
    /// Key holding the serialized identity snapshot.
    #[serde(default = "default_identity_key")]
    pub identity_key: String,
    /// Maximum credential age in hours. `None` disables expiry.
    #[serde(default)]
    pub max_age_hours: Option<u64>,
    /// Re-check role and status against the live user record on every
    /// protected command.
    #[serde(default = "default_true")]
    pub revalidate_remote: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            store_path: default_store_path(),
            token_key: default_token_key(),
            identity_key: default_identity_key(),
            max_age_hours: None,
            revalidate_remote: true,
        }
    }
}

fn default_backend() -> String {
    "file".to_string()
}

fn default_store_path() -> String {
    "data/session.json".to_string()
}

fn default_token_key() -> String {
    "admin_auth_token".to_string()
}

fn default_identity_key() -> String {
    "admin_user_data".to_string()
}

fn default_true() -> bool {
    true
}
