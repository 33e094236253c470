//! User entity model.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::role::UserRole;
use super::status::UserStatus;
use crate::record::RemoteRecord;

/// A user record as served by the `users` collection.
///
/// This is also the subject record the access gate authenticates against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    #[serde(rename = "id_usuario", alias = "id")]
    pub id: i64,
    /// Full name.
    #[serde(rename = "nombre", alias = "name", default)]
    pub name: Option<String>,
    /// Login email.
    #[serde(rename = "correo", alias = "email", default)]
    pub email: Option<String>,
    /// Phone number.
    #[serde(rename = "telefono", alias = "phone", default)]
    pub phone: Option<String>,
    /// Password-equivalent secret, compared verbatim at login.
    #[serde(rename = "contrasena", alias = "secret", alias = "password", default)]
    pub secret: Option<String>,
    /// Postal address.
    #[serde(rename = "direccion", alias = "address", default)]
    pub address: Option<String>,
    /// Profile picture URL.
    #[serde(rename = "foto_perfil", alias = "photo", default)]
    pub photo: Option<String>,
    /// Role.
    #[serde(rename = "rol", alias = "role", default)]
    pub role: UserRole,
    /// Account status.
    #[serde(rename = "estado", alias = "status", default)]
    pub status: UserStatus,
    /// Registration timestamp as sent by the API.
    #[serde(rename = "fecha_registro", alias = "created_at", default)]
    pub registered_at: Option<String>,
    /// Fields not modeled here, preserved for write-back.
    #[serde(flatten)]
    pub extra: RemoteRecord,
}

impl User {
    /// Name for display, falling back to a synthetic label.
    pub fn display_name(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => format!("User {}", self.id),
        }
    }

    /// Case-insensitive email comparison. Records without an email never match.
    pub fn email_matches(&self, email: &str) -> bool {
        self.email
            .as_deref()
            .is_some_and(|own| own.to_lowercase() == email.to_lowercase())
    }

    /// Check if this user may operate the console right now.
    pub fn is_active_administrator(&self) -> bool {
        self.role.is_administrator() && self.status.is_active()
    }
}

/// Editable user fields, used both to create and to update a user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserDraft {
    /// Full name.
    #[serde(rename = "nombre")]
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,
    /// Login email.
    #[serde(rename = "correo")]
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    /// Phone number.
    #[serde(rename = "telefono")]
    pub phone: String,
    /// Postal address.
    #[serde(rename = "direccion")]
    pub address: String,
    /// Role.
    #[serde(rename = "rol")]
    pub role: UserRole,
    /// Account status.
    #[serde(rename = "estado")]
    pub status: UserStatus,
    /// New secret. Blank means "keep the current one" on update.
    #[serde(rename = "contrasena", skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    /// Profile picture URL.
    #[serde(rename = "foto_perfil")]
    pub photo: String,
}

impl UserDraft {
    /// The new secret, if a non-blank one was supplied.
    pub fn new_secret(&self) -> Option<&str> {
        self.secret.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// Overwrite the editable fields of an existing record.
    ///
    /// The secret is replaced only when a non-blank one was supplied and
    /// fields outside the draft are left untouched.
    pub fn apply_to(&self, user: &mut User) {
        user.name = Some(self.name.clone());
        user.email = Some(self.email.clone());
        user.phone = Some(self.phone.clone());
        user.address = Some(self.address.clone());
        user.role = self.role.clone();
        user.status = self.status.clone();
        if let Some(secret) = self.new_secret() {
            user.secret = Some(secret.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> User {
        serde_json::from_value(json!({
            "id_usuario": 3,
            "nombre": "Ana",
            "correo": "Ana@Shop.com",
            "contrasena": "s3cret",
            "rol": "administrador",
            "estado": "activo",
            "fecha_registro": "2024-01-02T03:04:05",
            "ultimo_acceso": "2024-05-01"
        }))
        .unwrap()
    }

    #[test]
    fn test_decodes_wire_names() {
        let user = sample();
        assert_eq!(user.id, 3);
        assert!(user.is_active_administrator());
        assert_eq!(user.extra.get("ultimo_acceso"), Some(&json!("2024-05-01")));
    }

    #[test]
    fn test_decodes_english_names() {
        let user: User = serde_json::from_value(json!({
            "id": 9,
            "email": "a@x.com",
            "secret": "p",
            "role": "administrador",
            "status": "activo"
        }))
        .unwrap();
        assert_eq!(user.id, 9);
        assert_eq!(user.secret.as_deref(), Some("p"));
        assert!(user.is_active_administrator());
    }

    #[test]
    fn test_unknown_fields_written_back() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["ultimo_acceso"], json!("2024-05-01"));
        assert_eq!(value["rol"], json!("administrador"));
    }

    #[test]
    fn test_email_matches_case_insensitively() {
        let user = sample();
        assert!(user.email_matches("ana@shop.COM"));
        assert!(!user.email_matches("ana@shop.org"));
    }

    #[test]
    fn test_draft_keeps_secret_when_blank() {
        let mut user = sample();
        let draft = UserDraft {
            name: "Ana Maria".to_string(),
            email: "ana@shop.com".to_string(),
            phone: "555".to_string(),
            address: String::new(),
            role: UserRole::Administrator,
            status: UserStatus::Inactive,
            secret: Some("   ".to_string()),
            photo: String::new(),
        };
        draft.apply_to(&mut user);
        assert_eq!(user.secret.as_deref(), Some("s3cret"));
        assert_eq!(user.status, UserStatus::Inactive);
        assert_eq!(user.name.as_deref(), Some("Ana Maria"));
    }

    #[test]
    fn test_draft_validation() {
        let draft = UserDraft {
            name: String::new(),
            email: "not-an-email".to_string(),
            phone: String::new(),
            address: String::new(),
            role: UserRole::Customer,
            status: UserStatus::Active,
            secret: None,
            photo: String::new(),
        };
        let errors = draft.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
        assert!(errors.field_errors().contains_key("email"));
    }
}
