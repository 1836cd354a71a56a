/// Flow controller
///
/// Owns the slide index, the collected form data and the submission flag,
/// and drives transitions. All methods take `&self`; state sits behind a
/// mutex that is never held across an `.await`, so one controller can be
/// shared between UI callbacks.

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

use super::appearance::Appearance;
use super::builder::{FlowBuilder, FlowCallbacks};
use super::persistence::{persist_completion, PersistOutcome};
use super::presentation::Presentation;
use super::state::{FlowPhase, FlowState};
use crate::config::OnboardingConfig;
use crate::error::FlowError;
use crate::messaging::{EventBus, FlowCommand, FlowEvent};
use crate::navigation::NavigationChrome;
use crate::slides::{FieldErrors, FormData, FormValue, Slide, SlideKind};
use crate::storage::Storage;
use crate::validation::validate;

/// Why a navigation request did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    /// A submit hook is still running
    Submitting,

    /// Back pressed on the first slide
    AtFirstSlide,

    /// A swipe moved the carousel while the submit hook ran
    Superseded,

    /// The flow is completing or already finished
    Inactive,
}

impl fmt::Display for BlockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            BlockReason::Submitting => "Submission in progress",
            BlockReason::AtFirstSlide => "Already at first slide",
            BlockReason::Superseded => "Slide changed during submission",
            BlockReason::Inactive => "Onboarding flow is not active",
        };
        f.write_str(reason)
    }
}

/// Navigation result
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationResult {
    /// Navigation succeeded, now on this slide
    Success(usize),

    /// Form validation failed; nothing moved
    Invalid(FieldErrors),

    /// Navigation was a no-op
    Blocked { reason: BlockReason },

    /// Flow completed from the last slide
    Completed,

    /// Flow was skipped
    Skipped,
}

impl NavigationResult {
    /// Whether this result ended the flow
    pub fn is_terminal(&self) -> bool {
        matches!(self, NavigationResult::Completed | NavigationResult::Skipped)
    }
}

pub struct FlowController {
    slides: Vec<Slide>,
    config: OnboardingConfig,
    appearance: Appearance,
    state: Mutex<FlowState>,
    storage: Option<Arc<dyn Storage>>,
    presentation: Arc<dyn Presentation>,
    callbacks: FlowCallbacks,
    events: EventBus,
}

impl FlowController {
    pub fn builder(slides: Vec<Slide>) -> FlowBuilder {
        FlowBuilder::new(slides)
    }

    /// Slides are already checked by the builder
    pub(crate) fn new(
        slides: Vec<Slide>,
        config: OnboardingConfig,
        storage: Option<Arc<dyn Storage>>,
        presentation: Arc<dyn Presentation>,
        callbacks: FlowCallbacks,
        events: EventBus,
    ) -> Self {
        let state = FlowState::new(slides.len(), config.initial_slide);
        let appearance = Appearance::resolve(&config);

        tracing::debug!(
            "Onboarding flow created: {} slides, preset {}, starting at {}",
            slides.len(),
            appearance.preset,
            config.initial_slide
        );

        Self {
            slides,
            config,
            appearance,
            state: Mutex::new(state),
            storage,
            presentation,
            callbacks,
            events,
        }
    }

    /// Next button pressed
    pub async fn advance(&self) -> NavigationResult {
        let (index, submission) = {
            let mut state = self.state.lock();
            if !state.is_active() {
                return NavigationResult::Blocked {
                    reason: BlockReason::Inactive,
                };
            }
            if state.is_submitting() {
                tracing::debug!("Ignoring advance while submitting");
                return NavigationResult::Blocked {
                    reason: BlockReason::Submitting,
                };
            }

            let index = state.current_index();
            let slide = &self.slides[index];
            let mut submission = None;

            if let SlideKind::Form { fields, on_submit, .. } = &slide.kind {
                let errors = validate(fields, state.form_data());
                state.set_errors(errors.clone());

                if !errors.is_empty() {
                    drop(state);
                    return self.reject(slide, errors);
                }

                if let Some(handler) = on_submit {
                    state.set_submitting(true);
                    submission = Some((Arc::clone(handler), state.form_data().clone()));
                }
            }

            (index, submission)
        };

        if let Some((handler, form_data)) = submission {
            let slide_id = &self.slides[index].id;
            self.presentation.submitting_changed(true);
            self.events.publish(FlowEvent::SubmitStarted {
                slide_id: slide_id.clone(),
            });

            let result = handler.submit(form_data).await;
            if let Err(e) = &result {
                tracing::warn!("Form submit error on {}: {}", slide_id, e);
            }

            self.state.lock().set_submitting(false);
            self.presentation.submitting_changed(false);
            self.events.publish(FlowEvent::SubmitFinished {
                slide_id: slide_id.clone(),
                succeeded: result.is_ok(),
            });
        }

        let form_data = {
            let mut state = self.state.lock();
            if !state.is_active() {
                return NavigationResult::Blocked {
                    reason: BlockReason::Inactive,
                };
            }
            if state.current_index() != index {
                tracing::debug!(
                    "Advance from {} superseded by swipe to {}",
                    index,
                    state.current_index()
                );
                return NavigationResult::Blocked {
                    reason: BlockReason::Superseded,
                };
            }

            if !state.is_last_slide() {
                state.set_index(index + 1);
                None
            } else {
                state.set_phase(FlowPhase::Completing);
                Some(state.form_data().clone())
            }
        };

        match form_data {
            None => {
                self.presentation.transition_to(index + 1);
                self.slide_changed(index, index + 1);
                NavigationResult::Success(index + 1)
            }
            Some(form_data) => self.complete(form_data).await,
        }
    }

    /// Back button pressed
    pub fn retreat(&self) -> NavigationResult {
        let (from, to) = {
            let mut state = self.state.lock();
            if !state.is_active() {
                return NavigationResult::Blocked {
                    reason: BlockReason::Inactive,
                };
            }

            let from = state.current_index();
            if from == 0 {
                return NavigationResult::Blocked {
                    reason: BlockReason::AtFirstSlide,
                };
            }
            state.set_index(from - 1);
            (from, from - 1)
        };

        self.presentation.transition_to(to);
        self.slide_changed(from, to);
        NavigationResult::Success(to)
    }

    /// Skip button pressed
    ///
    /// Allowed while a submit hook runs; that advance then reports
    /// [`BlockReason::Inactive`].
    pub async fn skip(&self) -> NavigationResult {
        {
            let mut state = self.state.lock();
            if !state.is_active() {
                return NavigationResult::Blocked {
                    reason: BlockReason::Inactive,
                };
            }
            state.set_phase(FlowPhase::Completing);
        }

        self.persist().await;

        match (&self.callbacks.on_skip, &self.callbacks.on_completion) {
            (Some(on_skip), _) => on_skip(),
            (None, Some(on_completion)) => on_completion(None),
            (None, None) => {}
        }

        self.state.lock().set_phase(FlowPhase::Finished);
        tracing::info!("Onboarding skipped");
        self.events.publish(FlowEvent::Skipped);
        NavigationResult::Skipped
    }

    /// A swipe landed on `index`
    ///
    /// Updates arrive in order; out-of-range indices leave the state alone.
    /// Once the flow stops being active the swipe is reported as
    /// [`BlockReason::Inactive`].
    pub fn go_to(&self, index: usize) -> Result<NavigationResult, FlowError> {
        let from = {
            let mut state = self.state.lock();
            if !state.is_active() {
                return Ok(NavigationResult::Blocked {
                    reason: BlockReason::Inactive,
                });
            }
            if index >= state.slide_count() {
                return Err(FlowError::OutOfRange {
                    index: index as i64,
                    len: state.slide_count(),
                });
            }
            state.set_index(index)
        };

        if from != index {
            self.slide_changed(from, index);
        }
        Ok(NavigationResult::Success(index))
    }

    /// A swipe came to rest at `offset` on a carousel of `page_width` pages
    pub fn settle_swipe(&self, offset: f64, page_width: f64) -> Result<NavigationResult, FlowError> {
        if !self.config.swipe_enabled {
            return Err(FlowError::SwipeDisabled);
        }

        let len = self.slides.len();
        let page = (offset / page_width).round();
        if !page.is_finite() {
            return Err(FlowError::OutOfRange {
                index: i64::MAX,
                len,
            });
        }

        let index = page as i64;
        if index < 0 {
            return Err(FlowError::OutOfRange { index, len });
        }
        self.go_to(index as usize)
    }

    /// Merge one field value and clear its error
    ///
    /// No validation here; that happens on advance. Ignored once the flow
    /// stops being active.
    pub fn update_field(&self, key: impl Into<String>, value: impl Into<FormValue>) {
        let key = key.into();
        let mut state = self.state.lock();
        if !state.is_active() {
            tracing::debug!("Ignoring update of {} on inactive flow", key);
            return;
        }
        state.update_field(key, value.into());
    }

    /// Run one command from the host
    pub async fn execute(&self, command: FlowCommand) -> Result<NavigationResult, FlowError> {
        tracing::debug!("Executing command: {}", command);

        match command {
            FlowCommand::Advance => Ok(self.advance().await),
            FlowCommand::Retreat => Ok(self.retreat()),
            FlowCommand::Skip => Ok(self.skip().await),
            FlowCommand::GoTo { index } => self.go_to(index),
            FlowCommand::SettleSwipe { offset, page_width } => {
                self.settle_swipe(offset, page_width)
            }
            FlowCommand::UpdateField { key, value } => {
                self.update_field(key, value);
                // Stays on the current slide
                Ok(NavigationResult::Success(self.current_index()))
            }
        }
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> FlowState {
        self.state.lock().clone()
    }

    pub fn current_index(&self) -> usize {
        self.state.lock().current_index()
    }

    pub fn current_slide(&self) -> &Slide {
        &self.slides[self.current_index()]
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn is_finished(&self) -> bool {
        self.state.lock().is_finished()
    }

    /// Buttons and pagination for the active slide
    pub fn chrome(&self) -> NavigationChrome {
        let (index, submitting) = {
            let state = self.state.lock();
            (state.current_index(), state.is_submitting())
        };
        NavigationChrome::derive(&self.slides, index, submitting, &self.appearance.navigation)
    }

    /// Render the active slide if it is a custom one
    pub fn render_current(&self) -> Option<serde_json::Value> {
        self.current_slide()
            .render_custom(&self.appearance.theme, self.appearance.dark_mode)
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    pub fn config(&self) -> &OnboardingConfig {
        &self.config
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    fn reject(&self, slide: &Slide, errors: FieldErrors) -> NavigationResult {
        tracing::debug!("Validation failed on {}: {:?}", slide.id, errors);
        self.presentation.show_errors(&errors);
        self.events.publish(FlowEvent::ValidationFailed {
            slide_id: slide.id.clone(),
            errors: errors.clone(),
        });
        NavigationResult::Invalid(errors)
    }

    fn slide_changed(&self, from: usize, to: usize) {
        tracing::debug!("Slide changed {} -> {}", from, to);
        if let Some(on_slide_change) = &self.callbacks.on_slide_change {
            on_slide_change(to);
        }
        self.events.publish(FlowEvent::SlideChanged { from, to });
    }

    async fn persist(&self) {
        let outcome = persist_completion(
            self.storage.as_deref(),
            &self.config.storage,
            self.callbacks.on_persisted.as_ref(),
        )
        .await;

        if outcome == PersistOutcome::Failed {
            self.events.publish(FlowEvent::CompletionPersistFailed {
                key: self.config.storage.key.clone(),
            });
        }
    }

    async fn complete(&self, form_data: FormData) -> NavigationResult {
        self.persist().await;

        if let Some(on_completion) = &self.callbacks.on_completion {
            on_completion(Some(&form_data));
        }

        self.state.lock().set_phase(FlowPhase::Finished);
        tracing::info!("Onboarding completed with {} fields", form_data.len());
        self.events.publish(FlowEvent::Completed { form_data });
        NavigationResult::Completed
    }
}

impl fmt::Debug for FlowController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlowController")
            .field("slides", &self.slides.len())
            .field("state", &*self.state.lock())
            .field("preset", &self.appearance.preset)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SubmitError;
    use crate::slides::{FormFieldConfig, IconSpec, ImageSource, SubmitHandler};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn image(id: &str) -> Slide {
        Slide::image(id, ImageSource::Uri(format!("https://img/{}.png", id)))
    }

    fn three_slides() -> Vec<Slide> {
        vec![
            image("one"),
            image("two"),
            Slide::form("three", vec![FormFieldConfig::text("name", "Name").required()]),
        ]
    }

    struct CountingSubmit {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl SubmitHandler for CountingSubmit {
        async fn submit(&self, _data: FormData) -> Result<(), SubmitError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            if self.fail {
                Err(SubmitError::Rejected("server said no".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[tokio::test]
    async fn test_advance_through_plain_slides() {
        let flow = FlowController::builder(vec![image("a"), image("b"), image("c")])
            .build()
            .unwrap();

        assert_eq!(flow.advance().await, NavigationResult::Success(1));
        assert_eq!(flow.advance().await, NavigationResult::Success(2));
        assert_eq!(flow.advance().await, NavigationResult::Completed);
        assert!(flow.is_finished());
        assert_eq!(
            flow.advance().await,
            NavigationResult::Blocked {
                reason: BlockReason::Inactive
            }
        );
    }

    #[tokio::test]
    async fn test_form_blocks_until_valid() {
        let flow = FlowController::builder(three_slides()).build().unwrap();
        flow.go_to(2).unwrap();

        let result = flow.advance().await;
        match result {
            NavigationResult::Invalid(errors) => {
                assert_eq!(errors["name"], "Name is required");
            }
            other => panic!("expected validation failure, got {:?}", other),
        }
        assert_eq!(flow.current_index(), 2);
        assert_eq!(flow.snapshot().errors().len(), 1);

        flow.update_field("name", "Ann");
        assert!(flow.snapshot().errors().is_empty());
        assert_eq!(flow.advance().await, NavigationResult::Completed);
    }

    #[tokio::test]
    async fn test_retreat() {
        let flow = FlowController::builder(three_slides()).build().unwrap();
        assert_eq!(
            flow.retreat(),
            NavigationResult::Blocked {
                reason: BlockReason::AtFirstSlide
            }
        );

        flow.advance().await;
        assert_eq!(flow.retreat(), NavigationResult::Success(0));
    }

    #[tokio::test]
    async fn test_submit_failure_does_not_block() {
        let handler = Arc::new(CountingSubmit {
            calls: AtomicUsize::new(0),
            fail: true,
        });
        let slides = vec![
            Slide::form("profile", vec![FormFieldConfig::text("name", "Name")])
                .on_submit(handler.clone()),
            image("done"),
        ];
        let flow = FlowController::builder(slides).build().unwrap();
        let (rx, _id) = flow.events().subscribe();

        assert_eq!(flow.advance().await, NavigationResult::Success(1));
        assert_eq!(handler.calls.load(Ordering::SeqCst), 1);
        assert!(!flow.snapshot().is_submitting());

        let events: Vec<_> = rx.try_iter().collect();
        assert!(events.contains(&FlowEvent::SubmitFinished {
            slide_id: "profile".to_string(),
            succeeded: false
        }));
    }

    #[tokio::test]
    async fn test_concurrent_advance_submits_once() {
        let handler = Arc::new(CountingSubmit {
            calls: AtomicUsize::new(0),
            fail: false,
        });
        let slides = vec![
            Slide::form("profile", vec![FormFieldConfig::text("name", "Name")])
                .on_submit(handler.clone()),
            image("two"),
            image("three"),
        ];
        let flow = FlowController::builder(slides).build().unwrap();

        let (first, second) = tokio::join!(flow.advance(), flow.advance());

        assert_eq!(first, NavigationResult::Success(1));
        assert_eq!(
            second,
            NavigationResult::Blocked {
                reason: BlockReason::Submitting
            }
        );
        assert_eq!(handler.calls.load(Ordering::SeqCst), 1);
        assert_eq!(flow.current_index(), 1);
    }

    #[tokio::test]
    async fn test_go_to_bounds() {
        let flow = FlowController::builder(three_slides()).build().unwrap();
        assert_eq!(
            flow.go_to(3),
            Err(FlowError::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(flow.current_index(), 0);
        assert_eq!(flow.go_to(2), Ok(NavigationResult::Success(2)));
    }

    #[tokio::test]
    async fn test_settle_swipe() {
        let flow = FlowController::builder(three_slides()).build().unwrap();

        assert_eq!(flow.settle_swipe(390.0, 390.0), Ok(NavigationResult::Success(1)));
        assert_eq!(flow.settle_swipe(760.0, 390.0), Ok(NavigationResult::Success(2)));
        assert_eq!(
            flow.settle_swipe(-390.0, 390.0),
            Err(FlowError::OutOfRange { index: -1, len: 3 })
        );
        assert!(flow.settle_swipe(10.0, 0.0).is_err());
        assert_eq!(flow.current_index(), 2);
    }

    #[tokio::test]
    async fn test_swipe_disabled() {
        let config = OnboardingConfig {
            swipe_enabled: false,
            ..Default::default()
        };
        let flow = FlowController::builder(three_slides())
            .config(config)
            .build()
            .unwrap();
        assert_eq!(flow.settle_swipe(390.0, 390.0), Err(FlowError::SwipeDisabled));
        // Buttons still navigate
        assert_eq!(flow.go_to(1), Ok(NavigationResult::Success(1)));
    }

    #[tokio::test]
    async fn test_skip_prefers_skip_callback() {
        let skipped = Arc::new(AtomicUsize::new(0));
        let completed = Arc::new(AtomicUsize::new(0));
        let (s, c) = (skipped.clone(), completed.clone());

        let flow = FlowController::builder(three_slides())
            .on_skip(move || {
                s.fetch_add(1, Ordering::SeqCst);
            })
            .on_completion(move |_| {
                c.fetch_add(1, Ordering::SeqCst);
            })
            .build()
            .unwrap();

        assert_eq!(flow.skip().await, NavigationResult::Skipped);
        assert_eq!(skipped.load(Ordering::SeqCst), 1);
        assert_eq!(completed.load(Ordering::SeqCst), 0);
        assert!(flow.is_finished());
        assert_eq!(
            flow.go_to(0),
            Ok(NavigationResult::Blocked {
                reason: BlockReason::Inactive
            })
        );
    }

    #[tokio::test]
    async fn test_skip_falls_back_to_completion_without_data() {
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = received.clone();

        let flow = FlowController::builder(three_slides())
            .on_completion(move |data| sink.lock().push(data.cloned()))
            .build()
            .unwrap();

        flow.update_field("name", "Ann");
        flow.skip().await;
        assert_eq!(*received.lock(), vec![None]);
    }

    #[tokio::test]
    async fn test_update_after_finish_ignored() {
        let flow = FlowController::builder(vec![image("only")]).build().unwrap();
        flow.advance().await;

        flow.update_field("late", "value");
        assert!(flow.snapshot().form_data().is_empty());
    }

    #[tokio::test]
    async fn test_execute_commands() {
        let flow = FlowController::builder(three_slides()).build().unwrap();

        assert_eq!(
            flow.execute(FlowCommand::GoTo { index: 2 }).await,
            Ok(NavigationResult::Success(2))
        );
        flow.execute(FlowCommand::UpdateField {
            key: "name".to_string(),
            value: FormValue::from("Ann"),
        })
        .await
        .unwrap();
        assert_eq!(
            flow.execute(FlowCommand::Advance).await,
            Ok(NavigationResult::Completed)
        );
    }

    #[tokio::test]
    async fn test_chrome_tracks_state() {
        let slides = vec![
            Slide::icon("a", IconSpec::new("star")),
            Slide::icon("b", IconSpec::new("moon")),
        ];
        let flow = FlowController::builder(slides).build().unwrap();

        let chrome = flow.chrome();
        assert!(chrome.back.is_none());
        assert_eq!(chrome.next.label, flow.appearance().navigation.next_label);

        flow.advance().await;
        let chrome = flow.chrome();
        assert!(chrome.back.is_some());
        assert!(chrome.is_last);
    }
}
