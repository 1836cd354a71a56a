/// Flow events
///
/// Events represent things that have happened (past tense).
/// They are broadcast to all subscribers.

use crate::slides::{FieldErrors, FormData};

#[derive(Debug, Clone, PartialEq)]
pub enum FlowEvent {
    /// The active slide changed
    SlideChanged { from: usize, to: usize },

    /// A form slide refused to advance
    ValidationFailed {
        slide_id: String,
        errors: FieldErrors,
    },

    /// A submit hook was invoked
    SubmitStarted { slide_id: String },

    /// A submit hook returned
    SubmitFinished { slide_id: String, succeeded: bool },

    /// The completion flag could not be written
    CompletionPersistFailed { key: String },

    /// The flow reached the end of its last slide
    Completed { form_data: FormData },

    /// The user skipped the rest of the flow
    Skipped,
}

impl FlowEvent {
    /// Get a human-readable description of the event
    pub fn description(&self) -> String {
        match self {
            FlowEvent::SlideChanged { from, to } => {
                format!("Slide changed {} -> {}", from, to)
            }
            FlowEvent::ValidationFailed { slide_id, errors } => {
                format!("Validation failed on {} ({} errors)", slide_id, errors.len())
            }
            FlowEvent::SubmitStarted { slide_id } => format!("Submitting {}", slide_id),
            FlowEvent::SubmitFinished {
                slide_id,
                succeeded,
            } => {
                if *succeeded {
                    format!("Submitted {}", slide_id)
                } else {
                    format!("Submit failed for {}", slide_id)
                }
            }
            FlowEvent::CompletionPersistFailed { key } => {
                format!("Could not persist completion under {}", key)
            }
            FlowEvent::Completed { form_data } => {
                format!("Onboarding completed with {} fields", form_data.len())
            }
            FlowEvent::Skipped => "Onboarding skipped".to_string(),
        }
    }

    /// Whether this event ends the flow
    pub fn is_terminal(&self) -> bool {
        matches!(self, FlowEvent::Completed { .. } | FlowEvent::Skipped)
    }
}
