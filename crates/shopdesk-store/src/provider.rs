//! Store manager that dispatches to the configured backend.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use shopdesk_core::config::SessionConfig;
use shopdesk_core::error::AppError;
use shopdesk_core::result::AppResult;
use shopdesk_core::traits::KeyValueStore;

/// Store manager that wraps the configured key/value backend.
///
/// The backend is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct StoreManager {
    /// The inner backend.
    inner: Arc<dyn KeyValueStore>,
}

impl StoreManager {
    /// Create a store manager from configuration.
    pub fn new(config: &SessionConfig) -> AppResult<Self> {
        let inner: Arc<dyn KeyValueStore> = match config.backend.as_str() {
            #[cfg(feature = "file")]
            "file" => {
                info!(path = %config.store_path, "Using file session store");
                Arc::new(crate::file::FileKeyValueStore::new(&config.store_path))
            }
            #[cfg(feature = "memory")]
            "memory" => {
                info!("Using in-memory session store");
                Arc::new(crate::memory::MemoryKeyValueStore::new())
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown session store backend: '{other}'. Supported: file, memory"
                )));
            }
        };

        Ok(Self { inner })
    }
}

#[async_trait]
impl KeyValueStore for StoreManager {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.inner.set(key, value).await
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.inner.delete(key).await
    }
}
