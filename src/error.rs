use thiserror::Error;

/// Library errors using thiserror for structured error handling.
///
/// Only [`FlowError`] ever reaches a caller as a hard failure. Storage and
/// submit errors are caught where they happen, logged, and the flow carries on.

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("Slide index {index} out of range (flow has {len} slides)")]
    OutOfRange { index: i64, len: usize },

    #[error("Swiping is disabled for this flow")]
    SwipeDisabled,

    #[error("Onboarding flow needs at least one slide")]
    EmptyFlow,

    #[error("Duplicate slide id: {0}")]
    DuplicateSlideId(String),

    #[error("Duplicate field key {key} on slide {slide_id}")]
    DuplicateFieldKey { slide_id: String, key: String },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read storage key {key}")]
    ReadFailed {
        key: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to write storage key {key}")]
    WriteFailed {
        key: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to remove storage key {key}")]
    RemoveFailed {
        key: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Form submission rejected: {0}")]
    Rejected(String),

    #[error("Form submission failed")]
    Failed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from {path}")]
    LoadFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to parse configuration")]
    ParseFailed(#[source] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Type alias for application Results using anyhow for context chaining
pub type AppResult<T> = anyhow::Result<T>;
