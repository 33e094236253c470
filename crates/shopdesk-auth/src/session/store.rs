//! Session persistence on top of a key/value store.

use std::sync::Arc;

use tracing::{debug, warn};

use shopdesk_core::config::SessionConfig;
use shopdesk_core::result::AppResult;
use shopdesk_core::traits::KeyValueStore;

use super::model::{Identity, Session};
use crate::credential::CredentialCodec;

/// Persists the current session as two entries: the encoded credential and
/// a JSON identity snapshot.
///
/// Reads never fail: unreadable or undecodable entries count as absent.
#[derive(Debug, Clone)]
pub struct SessionStore {
    /// Backing key/value store.
    store: Arc<dyn KeyValueStore>,
    /// Key of the encoded credential.
    token_key: String,
    /// Key of the identity snapshot.
    identity_key: String,
}

impl SessionStore {
    /// Create a session store using the key names from configuration.
    pub fn new(store: Arc<dyn KeyValueStore>, config: &SessionConfig) -> Self {
        Self {
            store,
            token_key: config.token_key.clone(),
            identity_key: config.identity_key.clone(),
        }
    }

    /// Persist a session and its identity snapshot, replacing any previous one.
    pub async fn save(&self, session: &Session, identity: &Identity) -> AppResult<()> {
        let snapshot = serde_json::to_string(identity)?;
        self.store
            .set(&self.token_key, &CredentialCodec::encode(session))
            .await?;
        self.store.set(&self.identity_key, &snapshot).await?;
        debug!(user_id = session.subject_id, "Session saved");
        Ok(())
    }

    /// The stored identity snapshot.
    pub async fn current(&self) -> Option<Identity> {
        let raw = self.read(&self.identity_key).await?;
        match serde_json::from_str(&raw) {
            Ok(identity) => Some(identity),
            Err(e) => {
                debug!(error = %e, "Stored identity snapshot is unreadable");
                None
            }
        }
    }

    /// The stored session, decoded from its credential.
    pub async fn credential(&self) -> Option<Session> {
        let raw = self.read(&self.token_key).await?;
        CredentialCodec::decode(&raw)
    }

    /// Whether a credential entry exists at all, decodable or not.
    pub async fn has_credential(&self) -> bool {
        match self.store.exists(&self.token_key).await {
            Ok(present) => present,
            Err(e) => {
                warn!(key = %self.token_key, error = %e, "Failed to read session store");
                false
            }
        }
    }

    /// Remove both entries. Clearing an empty store is a no-op.
    pub async fn clear(&self) -> AppResult<()> {
        self.store.delete(&self.token_key).await?;
        self.store.delete(&self.identity_key).await?;
        debug!("Session cleared");
        Ok(())
    }

    async fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key).await {
            Ok(value) => value,
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to read session store");
                None
            }
        }
    }
}
