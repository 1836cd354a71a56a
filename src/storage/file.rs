/// File-backed storage
///
/// Keeps all keys in one small JSON document in the platform config dir.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use super::Storage;
use crate::error::StorageError;

/// On-disk document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StorageDocument {
    /// Format version (for future migrations)
    version: u32,

    #[serde(default)]
    entries: BTreeMap<String, String>,
}

impl StorageDocument {
    const VERSION: u32 = 1;
}

pub struct FileStorage {
    path: PathBuf,
    // Serialises read-modify-write cycles
    lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Storage in the platform config directory
    pub fn in_config_dir() -> Result<Self, StorageError> {
        Self::default_path()
            .map(Self::new)
            .ok_or_else(|| StorageError::Unavailable("no config directory".to_string()))
    }

    /// Default document path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("onboarding-flow").join("storage.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self, key: &str) -> Result<StorageDocument, StorageError> {
        let read_failed = |source: Box<dyn std::error::Error + Send + Sync>| {
            StorageError::ReadFailed {
                key: key.to_string(),
                source,
            }
        };

        let exists = tokio::fs::try_exists(&self.path)
            .await
            .map_err(|e| read_failed(Box::new(e)))?;
        if !exists {
            tracing::debug!("No storage file at {}, starting fresh", self.path.display());
            return Ok(StorageDocument {
                version: StorageDocument::VERSION,
                entries: BTreeMap::new(),
            });
        }

        let json = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| read_failed(Box::new(e)))?;
        let document: StorageDocument =
            serde_json::from_str(&json).map_err(|e| read_failed(Box::new(e)))?;

        if document.version != StorageDocument::VERSION {
            tracing::warn!(
                "Storage file version mismatch: expected {}, found {}",
                StorageDocument::VERSION,
                document.version
            );
        }

        Ok(document)
    }

    async fn write_document(
        &self,
        document: &StorageDocument,
        on_error: impl Fn(Box<dyn std::error::Error + Send + Sync>) -> StorageError,
    ) -> Result<(), StorageError> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| on_error(Box::new(e)))?;
        }

        let json = serde_json::to_string_pretty(document).map_err(|e| on_error(Box::new(e)))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| on_error(Box::new(e)))?;

        tracing::debug!("Saved storage to: {}", self.path.display());
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().await;
        let document = self.read_document(key).await?;
        Ok(document.entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        let mut document = self.read_document(key).await?;
        document.version = StorageDocument::VERSION;
        document.entries.insert(key.to_string(), value.to_string());

        self.write_document(&document, |source| StorageError::WriteFailed {
            key: key.to_string(),
            source,
        })
        .await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        let mut document = self.read_document(key).await?;
        if document.entries.remove(key).is_none() {
            return Ok(());
        }

        self.write_document(&document, |source| StorageError::RemoveFailed {
            key: key.to_string(),
            source,
        })
        .await
    }
}
