//! JSON-file key/value store.
//!
//! The whole store is one JSON object on disk. Writes go to a sibling
//! temporary file that is then renamed over the original, so a crash never
//! leaves a half-written store behind. Writers in the same process are
//! serialized; separate processes race and the last writer wins.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use shopdesk_core::error::AppError;
use shopdesk_core::result::AppResult;
use shopdesk_core::traits::KeyValueStore;

type Entries = BTreeMap<String, String>;

/// Key/value store persisted as a JSON object in a single file.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    /// Location of the JSON file.
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process.
    lock: Arc<Mutex<()>>,
}

impl FileKeyValueStore {
    /// Create a store backed by `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all entries. A missing file is an empty store; a corrupt file is
    /// logged and treated as empty so the next write replaces it.
    async fn load(&self) -> AppResult<Entries> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => {
                return Err(AppError::with_source(
                    shopdesk_core::error::ErrorKind::Storage,
                    format!("Failed to read session store '{}': {e}", self.path.display()),
                    e,
                ));
            }
        };

        if raw.trim().is_empty() {
            return Ok(Entries::new());
        }

        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Session store is corrupt, ignoring contents");
                Ok(Entries::new())
            }
        }
    }

    async fn persist(&self, entries: &Entries) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        debug!(path = %self.path.display(), keys = entries.len(), "Session store written");
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load().await?;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries).await
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load().await?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.persist(&entries).await
    }
}
