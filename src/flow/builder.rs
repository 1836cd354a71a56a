/// Flow construction
///
/// Collects slides, configuration, collaborators and callbacks, checks them
/// once, and produces a [`FlowController`].

use std::collections::HashSet;
use std::sync::Arc;

use super::controller::FlowController;
use super::persistence::PersistHook;
use super::presentation::{Headless, Presentation};
use crate::config::OnboardingConfig;
use crate::error::FlowError;
use crate::messaging::EventBus;
use crate::slides::{FormData, Slide};
use crate::storage::Storage;
use crate::theme::QuickStart;

/// Called once when the flow completes; `None` when it was skipped
pub type CompletionCallback = Arc<dyn Fn(Option<&FormData>) + Send + Sync>;

/// Called with the new index whenever the active slide changes
pub type SlideChangeCallback = Arc<dyn Fn(usize) + Send + Sync>;

pub type SkipCallback = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone, Default)]
pub struct FlowCallbacks {
    pub on_completion: Option<CompletionCallback>,
    pub on_slide_change: Option<SlideChangeCallback>,
    pub on_skip: Option<SkipCallback>,
    pub on_persisted: Option<PersistHook>,
}

impl std::fmt::Debug for FlowCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowCallbacks")
            .field("on_completion", &self.on_completion.is_some())
            .field("on_slide_change", &self.on_slide_change.is_some())
            .field("on_skip", &self.on_skip.is_some())
            .field("on_persisted", &self.on_persisted.is_some())
            .finish()
    }
}

pub struct FlowBuilder {
    slides: Vec<Slide>,
    config: OnboardingConfig,
    storage: Option<Arc<dyn Storage>>,
    presentation: Option<Arc<dyn Presentation>>,
    callbacks: FlowCallbacks,
    events: Option<EventBus>,
}

impl FlowBuilder {
    pub fn new(slides: Vec<Slide>) -> Self {
        Self {
            slides,
            config: OnboardingConfig::default(),
            storage: None,
            presentation: None,
            callbacks: FlowCallbacks::default(),
            events: None,
        }
    }

    /// Start from a preset deck and its config
    pub fn from_quick_start(quick_start: QuickStart) -> Self {
        Self::new(quick_start.slides).config(quick_start.config)
    }

    pub fn config(mut self, config: OnboardingConfig) -> Self {
        self.config = config;
        self
    }

    pub fn storage(mut self, storage: Arc<dyn Storage>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn presentation(mut self, presentation: Arc<dyn Presentation>) -> Self {
        self.presentation = Some(presentation);
        self
    }

    /// Share an existing bus instead of creating one
    pub fn event_bus(mut self, events: EventBus) -> Self {
        self.events = Some(events);
        self
    }

    pub fn on_completion<F>(mut self, callback: F) -> Self
    where
        F: Fn(Option<&FormData>) + Send + Sync + 'static,
    {
        self.callbacks.on_completion = Some(Arc::new(callback));
        self
    }

    pub fn on_slide_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.callbacks.on_slide_change = Some(Arc::new(callback));
        self
    }

    pub fn on_skip<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.callbacks.on_skip = Some(Arc::new(callback));
        self
    }

    /// Runs after the completion flag was written successfully
    pub fn on_persisted<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.callbacks.on_persisted = Some(Arc::new(callback));
        self
    }

    pub fn build(self) -> Result<FlowController, FlowError> {
        check_slides(&self.slides)?;

        let len = self.slides.len();
        if self.config.initial_slide >= len {
            return Err(FlowError::OutOfRange {
                index: self.config.initial_slide as i64,
                len,
            });
        }

        if self.config.storage.enabled && self.storage.is_none() {
            tracing::warn!(
                "Storage enabled for key {} but no storage attached; completion will not persist",
                self.config.storage.key
            );
        }

        Ok(FlowController::new(
            self.slides,
            self.config,
            self.storage,
            self.presentation.unwrap_or_else(|| Arc::new(Headless)),
            self.callbacks,
            self.events.unwrap_or_default(),
        ))
    }
}

/// Non-empty, unique slide ids, unique field keys per form slide
fn check_slides(slides: &[Slide]) -> Result<(), FlowError> {
    if slides.is_empty() {
        return Err(FlowError::EmptyFlow);
    }

    let mut ids = HashSet::new();
    for slide in slides {
        if !ids.insert(slide.id.as_str()) {
            return Err(FlowError::DuplicateSlideId(slide.id.clone()));
        }

        let mut keys = HashSet::new();
        for field in slide.fields() {
            if !keys.insert(field.key.as_str()) {
                return Err(FlowError::DuplicateFieldKey {
                    slide_id: slide.id.clone(),
                    key: field.key.clone(),
                });
            }
        }
    }

    Ok(())
}
