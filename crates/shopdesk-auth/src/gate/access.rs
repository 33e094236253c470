//! The access gate: login checks and session authorization.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{debug, info, warn};

use shopdesk_core::config::SessionConfig;
use shopdesk_core::traits::Navigator;
use shopdesk_entity::User;

use super::directory::SubjectDirectory;
use super::error::AuthError;
use crate::session::{Identity, Session, SessionStore};

/// Outcome of a successful authentication.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginResult {
    /// The new session.
    pub session: Session,
    /// Snapshot of the authenticated user.
    pub identity: Identity,
}

/// Decides who may use the console.
///
/// Authentication is checked against the live user directory. Afterwards the
/// stored session is trusted locally, and optionally re-checked against the
/// directory before each protected operation.
#[derive(Debug, Clone)]
pub struct AccessGate {
    /// Source of user records.
    directory: Arc<dyn SubjectDirectory>,
    /// Persisted session.
    sessions: SessionStore,
    /// Where to send the operator when access is refused.
    navigator: Arc<dyn Navigator>,
    /// Optional credential lifetime.
    max_age: Option<Duration>,
    /// Re-check role and status remotely in `require_authorization`.
    revalidate_remote: bool,
}

impl AccessGate {
    /// Create a gate.
    pub fn new(
        directory: Arc<dyn SubjectDirectory>,
        sessions: SessionStore,
        navigator: Arc<dyn Navigator>,
        config: &SessionConfig,
    ) -> Self {
        Self {
            directory,
            sessions,
            navigator,
            max_age: config
                .max_age_hours
                .and_then(|h| i64::try_from(h).ok())
                .and_then(Duration::try_hours),
            revalidate_remote: config.revalidate_remote,
        }
    }

    /// The underlying session store.
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Check an email/secret pair against the user directory.
    ///
    /// Checks run in a fixed order and the first failure wins: unknown email,
    /// wrong secret, non-administrator role, inactive account. Nothing is
    /// persisted.
    pub async fn authenticate(&self, email: &str, secret: &str) -> Result<LoginResult, AuthError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(AuthError::MissingInput("your email"));
        }
        if secret.is_empty() {
            return Err(AuthError::MissingInput("your password"));
        }

        let users = self.directory.list_subjects().await?.unwrap_or_default();
        let user = users
            .iter()
            .find(|u| u.email_matches(email))
            .ok_or(AuthError::NotFound)?;

        check_subject(user, Some(secret))?;

        info!(user_id = user.id, "Administrator authenticated");
        Ok(LoginResult {
            session: Session::new(user.id, user.email.clone().unwrap_or_else(|| email.to_string())),
            identity: Identity::from(user),
        })
    }

    /// Authenticate and persist the resulting session.
    pub async fn login(&self, email: &str, secret: &str) -> Result<LoginResult, AuthError> {
        let result = self.authenticate(email, secret).await?;
        self.sessions.save(&result.session, &result.identity).await?;
        Ok(result)
    }

    /// Whether a usable administrator session is stored.
    ///
    /// A stored session that fails the check is removed.
    pub async fn is_authorized(&self) -> bool {
        self.authorized_identity().await.is_ok()
    }

    /// The stored identity, if it passes the local checks.
    ///
    /// Same rules and eviction as [`AccessGate::is_authorized`].
    pub async fn authorized_identity(&self) -> Result<Identity, AuthError> {
        self.authorized_state().await.map(|(_, identity)| identity)
    }

    /// `is_authorized`, re-checked against the directory when configured,
    /// sending the operator to login on failure. Never errors.
    pub async fn require_authorization(&self) -> bool {
        self.authorize().await.is_ok()
    }

    /// Like [`AccessGate::require_authorization`], but reports why access was
    /// refused.
    ///
    /// The operator is sent to login when the session is refused. A failure
    /// to reach the directory is returned without navigation.
    pub async fn authorize(&self) -> Result<Identity, AuthError> {
        let verdict = if self.revalidate_remote {
            self.revalidate().await
        } else {
            self.authorized_identity().await
        };

        if let Err(e) = &verdict {
            if e.is_denial() {
                debug!(reason = %e, "Authorization required");
                self.navigator.redirect_to_login();
            } else {
                warn!(error = %e, "Could not verify session");
            }
        }
        verdict
    }

    /// Re-check the stored session against the live user record.
    ///
    /// Evicts the session when the user is gone, no longer an administrator,
    /// or inactive. Transport failures are returned without eviction. On
    /// success the identity snapshot is refreshed.
    pub async fn revalidate(&self) -> Result<Identity, AuthError> {
        let (session, stored) = self.authorized_state().await?;

        let verdict = match self.directory.find_subject(session.subject_id).await? {
            None => Err(AuthError::NotFound),
            Some(user) => check_subject(&user, None).map(|()| Identity::from(&user)),
        };

        match verdict {
            Ok(identity) => {
                if identity != stored {
                    self.sessions.save(&session, &identity).await?;
                }
                Ok(identity)
            }
            Err(reason) => {
                self.evict(&reason).await;
                Err(reason)
            }
        }
    }

    /// End the session and go to login.
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.sessions.clear().await?;
        info!("Logged out");
        self.navigator.redirect_to_login();
        Ok(())
    }

    async fn authorized_state(&self) -> Result<(Session, Identity), AuthError> {
        if !self.sessions.has_credential().await {
            return Err(AuthError::NotAuthenticated);
        }

        match self.inspect_stored().await {
            Ok(state) => Ok(state),
            Err(reason) => {
                self.evict(&reason).await;
                Err(reason)
            }
        }
    }

    async fn inspect_stored(&self) -> Result<(Session, Identity), AuthError> {
        let session = self
            .sessions
            .credential()
            .await
            .ok_or(AuthError::NotAuthenticated)?;
        let identity = self
            .sessions
            .current()
            .await
            .ok_or(AuthError::NotAuthenticated)?;

        if identity.id != session.subject_id {
            return Err(AuthError::NotAuthenticated);
        }
        if !identity.role.is_administrator() {
            return Err(AuthError::InsufficientRole);
        }
        if let Some(max_age) = self.max_age {
            if session.is_expired_at(max_age, Utc::now()) {
                return Err(AuthError::Expired);
            }
        }
        Ok((session, identity))
    }

    async fn evict(&self, reason: &AuthError) {
        warn!(reason = %reason, "Evicting stored session");
        if let Err(e) = self.sessions.clear().await {
            warn!(error = %e, "Failed to clear session store");
        }
    }
}

/// Apply the ordered subject checks. `secret` is skipped when `None`.
fn check_subject(user: &User, secret: Option<&str>) -> Result<(), AuthError> {
    if let Some(secret) = secret {
        if user.secret.as_deref() != Some(secret) {
            return Err(AuthError::InvalidCredential);
        }
    }
    if !user.role.is_administrator() {
        return Err(AuthError::InsufficientRole);
    }
    if !user.status.is_active() {
        return Err(AuthError::AccountInactive);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use serde_json::json;
    use shopdesk_client::ClientError;
    use shopdesk_core::traits::KeyValueStore;
    use shopdesk_entity::{UserRole, UserStatus};
    use shopdesk_store::memory::MemoryKeyValueStore;

    #[derive(Debug, Default)]
    struct FakeDirectory {
        users: Mutex<Option<Vec<User>>>,
        offline: Mutex<bool>,
    }

    impl FakeDirectory {
        fn with(users: Vec<User>) -> Self {
            Self {
                users: Mutex::new(Some(users)),
                offline: Mutex::new(false),
            }
        }

        fn update(&self, id: i64, f: impl FnOnce(&mut User)) {
            let mut users = self.users.lock().unwrap();
            if let Some(user) = users.as_mut().and_then(|u| u.iter_mut().find(|u| u.id == id)) {
                f(user);
            }
        }
    }

    #[async_trait]
    impl SubjectDirectory for FakeDirectory {
        async fn list_subjects(&self) -> Result<Option<Vec<User>>, ClientError> {
            if *self.offline.lock().unwrap() {
                return Err(ClientError::RemoteRequestFailed {
                    status: 502,
                    status_text: "Bad Gateway".into(),
                });
            }
            Ok(self.users.lock().unwrap().clone())
        }
    }

    #[derive(Debug, Default)]
    struct CountingNavigator(AtomicUsize);

    impl Navigator for CountingNavigator {
        fn redirect_to_login(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn user(id: i64, email: &str, secret: &str, role: &str, status: &str) -> User {
        serde_json::from_value(json!({
            "id_usuario": id,
            "nombre": format!("User {id}"),
            "correo": email,
            "contrasena": secret,
            "rol": role,
            "estado": status
        }))
        .unwrap()
    }

    fn users() -> Vec<User> {
        vec![
            user(1, "Admin@Shop.com", "s3cret", "administrador", "activo"),
            user(2, "cliente@shop.com", "pw", "usuario", "activo"),
            user(3, "off@shop.com", "pw", "administrador", "inactivo"),
            user(4, "both@shop.com", "pw", "usuario", "inactivo"),
        ]
    }

    struct Fixture {
        gate: AccessGate,
        directory: Arc<FakeDirectory>,
        navigator: Arc<CountingNavigator>,
        backend: MemoryKeyValueStore,
    }

    fn fixture_with(users: Vec<User>, config: SessionConfig) -> Fixture {
        let directory = Arc::new(FakeDirectory::with(users));
        let navigator = Arc::new(CountingNavigator::default());
        let backend = MemoryKeyValueStore::new();
        let sessions = SessionStore::new(Arc::new(backend.clone()), &config);
        let gate = AccessGate::new(directory.clone(), sessions, navigator.clone(), &config);
        Fixture {
            gate,
            directory,
            navigator,
            backend,
        }
    }

    fn fixture() -> Fixture {
        fixture_with(users(), SessionConfig::default())
    }

    #[tokio::test]
    async fn test_email_is_case_insensitive() {
        let f = fixture();
        let result = f.gate.authenticate("  admin@SHOP.com ", "s3cret").await.unwrap();
        assert_eq!(result.session.subject_id, 1);
        assert_eq!(result.session.email, "Admin@Shop.com");
        assert_eq!(result.identity.role, UserRole::Administrator);
    }

    #[tokio::test]
    async fn test_wrong_secret_is_invalid_credential() {
        let f = fixture();
        let err = f.gate.authenticate("admin@shop.com", "S3CRET").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredential));
    }

    #[tokio::test]
    async fn test_unknown_email_is_not_found() {
        let f = fixture();
        let err = f.gate.authenticate("ghost@shop.com", "x").await.unwrap_err();
        assert!(matches!(err, AuthError::NotFound));

        let empty = fixture_with(vec![], SessionConfig::default());
        let err = empty.gate.authenticate("admin@shop.com", "s3cret").await.unwrap_err();
        assert!(matches!(err, AuthError::NotFound));
    }

    #[tokio::test]
    async fn test_no_content_is_not_found() {
        let f = fixture();
        *f.directory.users.lock().unwrap() = None;
        let err = f.gate.authenticate("admin@shop.com", "s3cret").await.unwrap_err();
        assert!(matches!(err, AuthError::NotFound));
    }

    #[tokio::test]
    async fn test_role_checked_before_status() {
        let f = fixture();
        let err = f.gate.authenticate("cliente@shop.com", "pw").await.unwrap_err();
        assert!(matches!(err, AuthError::InsufficientRole));
        let err = f.gate.authenticate("off@shop.com", "pw").await.unwrap_err();
        assert!(matches!(err, AuthError::AccountInactive));
        let err = f.gate.authenticate("both@shop.com", "pw").await.unwrap_err();
        assert!(matches!(err, AuthError::InsufficientRole));
    }

    #[tokio::test]
    async fn test_role_spelling_variants_are_not_administrator() {
        let f = fixture_with(
            vec![
                user(5, "short@shop.com", "pw", "admin", "activo"),
                user(6, "upper@shop.com", "pw", "ADMINISTRADOR", "activo"),
                user(7, "padded@shop.com", "pw", " Administrator ", "activo"),
                user(8, "casing@shop.com", "pw", "administrador", "Activo"),
            ],
            SessionConfig::default(),
        );
        for email in ["short@shop.com", "upper@shop.com", "padded@shop.com"] {
            let err = f.gate.authenticate(email, "pw").await.unwrap_err();
            assert!(matches!(err, AuthError::InsufficientRole), "{email}");
        }
        let err = f.gate.authenticate("casing@shop.com", "pw").await.unwrap_err();
        assert!(matches!(err, AuthError::AccountInactive));
    }

    #[tokio::test]
    async fn test_blank_input_rejected() {
        let f = fixture();
        assert!(matches!(
            f.gate.authenticate("   ", "pw").await.unwrap_err(),
            AuthError::MissingInput(_)
        ));
        assert!(matches!(
            f.gate.authenticate("admin@shop.com", "").await.unwrap_err(),
            AuthError::MissingInput(_)
        ));
    }

    #[tokio::test]
    async fn test_authenticate_does_not_persist() {
        let f = fixture();
        f.gate.authenticate("admin@shop.com", "s3cret").await.unwrap();
        assert!(f.backend.is_empty());
        assert!(!f.gate.is_authorized().await);
    }

    #[tokio::test]
    async fn test_login_then_logout() {
        let f = fixture();
        f.gate.login("admin@shop.com", "s3cret").await.unwrap();
        assert!(f.gate.is_authorized().await);
        assert!(f.gate.require_authorization().await);
        assert_eq!(f.navigator.0.load(Ordering::SeqCst), 0);

        f.gate.logout().await.unwrap();
        assert!(f.gate.sessions().current().await.is_none());
        assert!(!f.gate.is_authorized().await);
        assert_eq!(f.navigator.0.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_stored_customer_role_is_evicted() {
        let f = fixture();
        let session = Session::new(2, "cliente@shop.com");
        let identity = Identity {
            id: 2,
            name: None,
            email: Some("cliente@shop.com".into()),
            role: UserRole::Customer,
            status: UserStatus::Active,
        };
        f.gate.sessions().save(&session, &identity).await.unwrap();

        assert!(!f.gate.is_authorized().await);
        assert!(f.backend.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_token_is_evicted() {
        let f = fixture();
        f.backend.set("admin_auth_token", "###").await.unwrap();
        f.backend.set("admin_user_data", "{}").await.unwrap();
        assert!(!f.gate.is_authorized().await);
        assert!(f.backend.is_empty());
    }

    #[tokio::test]
    async fn test_require_authorization_redirects_without_session() {
        let f = fixture();
        assert!(!f.gate.require_authorization().await);
        assert_eq!(f.navigator.0.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_revalidate_evicts_deactivated_admin() {
        let f = fixture();
        f.gate.login("admin@shop.com", "s3cret").await.unwrap();
        f.directory.update(1, |u| u.status = UserStatus::Inactive);

        let err = f.gate.revalidate().await.unwrap_err();
        assert!(matches!(err, AuthError::AccountInactive));
        assert!(f.backend.is_empty());
    }

    #[tokio::test]
    async fn test_revalidate_evicts_demoted_admin() {
        let f = fixture();
        f.gate.login("admin@shop.com", "s3cret").await.unwrap();
        f.directory.update(1, |u| u.role = UserRole::Customer);

        assert!(!f.gate.require_authorization().await);
        assert!(f.backend.is_empty());
        assert_eq!(f.navigator.0.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_revalidate_refreshes_snapshot() {
        let f = fixture();
        f.gate.login("admin@shop.com", "s3cret").await.unwrap();
        f.directory.update(1, |u| u.name = Some("Renamed".into()));

        let identity = f.gate.revalidate().await.unwrap();
        assert_eq!(identity.name.as_deref(), Some("Renamed"));
        assert_eq!(f.gate.sessions().current().await.unwrap().name.as_deref(), Some("Renamed"));
    }

    #[tokio::test]
    async fn test_revalidate_transport_failure_keeps_session() {
        let f = fixture();
        f.gate.login("admin@shop.com", "s3cret").await.unwrap();
        *f.directory.offline.lock().unwrap() = true;

        let err = f.gate.revalidate().await.unwrap_err();
        assert!(matches!(err, AuthError::Remote(_)));
        assert!(!err.is_denial());
        assert!(f.gate.is_authorized().await);

        assert!(!f.gate.require_authorization().await);
        assert_eq!(f.navigator.0.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_expired_session_is_evicted() {
        let config = SessionConfig {
            max_age_hours: Some(24),
            ..SessionConfig::default()
        };
        let f = fixture_with(users(), config);
        let result = f.gate.authenticate("admin@shop.com", "s3cret").await.unwrap();
        let mut session = result.session;
        session.issued_at -= Duration::hours(48);
        f.gate.sessions().save(&session, &result.identity).await.unwrap();

        let err = f.gate.authorized_identity().await.unwrap_err();
        assert!(matches!(err, AuthError::Expired));
        assert!(f.backend.is_empty());
    }
}
