//! Session and identity models.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use shopdesk_entity::{User, UserRole, UserStatus};

/// A logged-in console session, carried inside the credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Id of the authenticated user.
    #[serde(rename = "userId")]
    pub subject_id: i64,
    /// Email the user logged in with, as stored in their record.
    pub email: String,
    /// When the session was created.
    #[serde(rename = "timestamp", deserialize_with = "deserialize_issued_at")]
    pub issued_at: DateTime<Utc>,
}

impl Session {
    /// Start a session for `subject_id` now.
    pub fn new(subject_id: i64, email: impl Into<String>) -> Self {
        Self {
            subject_id,
            email: email.into(),
            issued_at: Utc::now(),
        }
    }

    /// Age of the session at `now`.
    pub fn age_at(&self, now: DateTime<Utc>) -> Duration {
        now - self.issued_at
    }

    /// Whether the session is older than `max_age` at `now`.
    pub fn is_expired_at(&self, max_age: Duration, now: DateTime<Utc>) -> bool {
        self.age_at(now) > max_age
    }
}

/// Accepts either an RFC 3339 string or epoch milliseconds.
fn deserialize_issued_at<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Millis(i64),
        Text(DateTime<Utc>),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Text(at) => Ok(at),
        Raw::Millis(ms) => Utc
            .timestamp_millis_opt(ms)
            .single()
            .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {ms}"))),
    }
}

/// Snapshot of the authenticated user kept next to the credential.
///
/// The secret is never part of the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// User id.
    #[serde(rename = "id_usuario", alias = "id")]
    pub id: i64,
    /// Display name.
    #[serde(rename = "nombre", alias = "name", default)]
    pub name: Option<String>,
    /// Login email.
    #[serde(rename = "correo", alias = "email", default)]
    pub email: Option<String>,
    /// Role at login time.
    #[serde(rename = "rol", alias = "role", default)]
    pub role: UserRole,
    /// Status at login time.
    #[serde(rename = "estado", alias = "status", default)]
    pub status: UserStatus,
}

impl Identity {
    /// Name for display.
    pub fn display_name(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => self
                .email
                .clone()
                .unwrap_or_else(|| format!("User {}", self.id)),
        }
    }
}

impl From<&User> for Identity {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            status: user.status.clone(),
        }
    }
}
