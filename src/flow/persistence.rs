/// Completion flag persistence
///
/// Writes and reads the "onboarding done" flag. Storage trouble never traps
/// a user in onboarding: write failures are logged and the flow finishes
/// anyway, read failures count as "not completed".

use parking_lot::Mutex;
use std::sync::Arc;

use crate::config::StorageConfig;
use crate::error::StorageError;
use crate::storage::Storage;

/// Value stored under the completion key
pub const COMPLETION_FLAG: &str = "true";

/// Runs after the completion flag was written
pub type PersistHook = Arc<dyn Fn() + Send + Sync>;

/// What `persist_completion` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistOutcome {
    /// Storage is disabled in the configuration
    Disabled,
    Persisted,
    /// The write failed and was logged
    Failed,
}

/// Write the completion flag if storage is enabled
pub async fn persist_completion(
    storage: Option<&dyn Storage>,
    config: &StorageConfig,
    on_persisted: Option<&PersistHook>,
) -> PersistOutcome {
    if !config.enabled {
        return PersistOutcome::Disabled;
    }

    let result = match storage {
        Some(storage) => storage.set(&config.key, COMPLETION_FLAG).await,
        None => Err(StorageError::Unavailable(
            "storage enabled but no storage attached".to_string(),
        )),
    };

    match result {
        Ok(()) => {
            tracing::debug!("Persisted onboarding completion under {}", config.key);
            if let Some(hook) = on_persisted {
                hook();
            }
            PersistOutcome::Persisted
        }
        Err(e) => {
            tracing::warn!("Error saving onboarding status: {}", e);
            PersistOutcome::Failed
        }
    }
}

/// Whether onboarding was completed before
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionStatus {
    /// Not read yet
    Unknown,
    Completed,
    NotCompleted,
}

impl CompletionStatus {
    /// Whether the host should show onboarding. `None` while still loading.
    pub fn should_show(&self) -> Option<bool> {
        match self {
            CompletionStatus::Unknown => None,
            CompletionStatus::Completed => Some(false),
            CompletionStatus::NotCompleted => Some(true),
        }
    }
}

/// Read side of the completion flag, usable without a flow
pub struct CompletionTracker {
    storage: Arc<dyn Storage>,
    key: String,
    status: Mutex<CompletionStatus>,
}

impl CompletionTracker {
    pub fn new(storage: Arc<dyn Storage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            status: Mutex::new(CompletionStatus::Unknown),
        }
    }

    /// Tracker for the default key
    pub fn with_default_key(storage: Arc<dyn Storage>) -> Self {
        Self::new(storage, crate::config::DEFAULT_STORAGE_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn status(&self) -> CompletionStatus {
        *self.status.lock()
    }

    pub fn is_loading(&self) -> bool {
        self.status() == CompletionStatus::Unknown
    }

    /// Read the flag and resolve the status
    pub async fn check_completion_status(&self) -> CompletionStatus {
        let status = match self.storage.get(&self.key).await {
            Ok(value) if value.as_deref() == Some(COMPLETION_FLAG) => CompletionStatus::Completed,
            Ok(_) => CompletionStatus::NotCompleted,
            Err(e) => {
                tracing::warn!("Error checking onboarding: {}", e);
                CompletionStatus::NotCompleted
            }
        };

        *self.status.lock() = status;
        status
    }

    /// Write the flag; status unchanged if the write fails
    pub async fn mark_complete(&self) -> CompletionStatus {
        match self.storage.set(&self.key, COMPLETION_FLAG).await {
            Ok(()) => *self.status.lock() = CompletionStatus::Completed,
            Err(e) => tracing::warn!("Error marking onboarding complete: {}", e),
        }
        self.status()
    }

    /// Remove the flag; status unchanged if the removal fails
    pub async fn reset(&self) -> CompletionStatus {
        match self.storage.remove(&self.key).await {
            Ok(()) => *self.status.lock() = CompletionStatus::NotCompleted,
            Err(e) => tracing::warn!("Error resetting onboarding: {}", e),
        }
        self.status()
    }
}
