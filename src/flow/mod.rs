/// Onboarding flow module
///
/// Drives one run through a deck of slides.
///
/// ## Architecture
///
/// ```text
/// FlowController
///   ├── FlowState (index, form data, submitting flag, errors, phase)
///   ├── Appearance (preset + overrides, resolved once)
///   ├── Presentation (host UI: transitions, errors, loading)
///   ├── Storage (completion flag)
///   └── EventBus (FlowEvent broadcast)
/// ```
///
/// ## Usage
///
/// ```rust,ignore
/// let flow = FlowController::builder(slides)
///     .config(config)
///     .storage(Arc::new(FileStorage::in_config_dir()?))
///     .on_completion(|data| println!("done: {:?}", data))
///     .build()?;
///
/// flow.update_field("name", "Ann");
/// match flow.advance().await {
///     NavigationResult::Invalid(errors) => { /* show errors */ }
///     NavigationResult::Completed => { /* dismiss */ }
///     _ => {}
/// }
/// ```
///
/// ## Lifecycle
///
/// 1. **Active** - navigation, swipes and edits are accepted
/// 2. **Completing** - completion flag is being written
/// 3. **Finished** - callbacks fired, every request is a no-op

pub mod appearance;
pub mod builder;
pub mod controller;
pub mod persistence;
pub mod presentation;
pub mod state;

// Re-export commonly used types
pub use appearance::Appearance;
pub use builder::{CompletionCallback, FlowBuilder, FlowCallbacks, SkipCallback, SlideChangeCallback};
pub use controller::{BlockReason, FlowController, NavigationResult};
pub use persistence::{
    persist_completion, CompletionStatus, CompletionTracker, PersistHook, PersistOutcome,
    COMPLETION_FLAG,
};
pub use presentation::{Headless, Presentation};
pub use state::{FlowPhase, FlowState};
