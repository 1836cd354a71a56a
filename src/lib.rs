//! Onboarding flow controller
//!
//! Slide navigation, form-data collection and completion persistence for a
//! themeable onboarding carousel. Drawing is left to the host UI, which
//! talks to a [`FlowController`] through [`Presentation`] and
//! [`FlowCommand`]s.
//!
//! ## Modules
//!
//! - `flow` - controller, state machine, completion persistence
//! - `slides` - slide and form field definitions
//! - `validation` - form validation and stock validators
//! - `theme` - theme model, presets, override merging
//! - `navigation` - navigation/animation config and chrome models
//! - `storage` - storage collaborator and built-in stores
//! - `messaging` - flow commands, events and the event bus
//! - `config` - caller configuration
//! - `error` - error types

pub mod config;
pub mod error;
pub mod flow;
pub mod messaging;
pub mod navigation;
pub mod slides;
pub mod storage;
pub mod theme;
pub mod validation;

pub use config::{OnboardingConfig, StorageConfig, DEFAULT_STORAGE_KEY};
pub use error::{AppResult, ConfigError, FlowError, StorageError, SubmitError};
pub use flow::{
    Appearance, BlockReason, CompletionStatus, CompletionTracker, FlowBuilder, FlowController,
    FlowState, NavigationResult, Presentation,
};
pub use messaging::{EventBus, FlowCommand, FlowEvent};
pub use slides::{FormData, FormFieldConfig, FormValue, Slide, SlideKind};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use theme::{merge_theme, resolve_preset, PresetName, QuickStart, Theme};
pub use validation::validate;
