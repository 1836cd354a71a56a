/// Presentation collaborator
///
/// The host UI draws slides and chrome. The controller tells it where to
/// scroll and what to show; the host calls back into the controller on
/// user input.

use crate::slides::FieldErrors;

pub trait Presentation: Send + Sync {
    /// Scroll the carousel to `index`
    fn transition_to(&self, index: usize);

    /// Show per-field errors for the active form slide
    fn show_errors(&self, _errors: &FieldErrors) {}

    /// The next button started or stopped loading
    fn submitting_changed(&self, _submitting: bool) {}
}

/// Presentation that ignores every signal, for headless flows
#[derive(Debug, Default, Clone, Copy)]
pub struct Headless;

impl Presentation for Headless {
    fn transition_to(&self, index: usize) {
        tracing::trace!("Headless transition to slide {}", index);
    }
}
