/// Flow state
///
/// Tracks the active slide, collected form data and submission progress.

use crate::slides::{FieldErrors, FormData, FormValue};

/// Lifecycle of one flow instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowPhase {
    /// Accepting navigation
    Active,

    /// Persisting the completion flag and firing callbacks
    Completing,

    /// Completed or skipped; the controller is inert
    Finished,
}

/// Flow state
#[derive(Debug, Clone, PartialEq)]
pub struct FlowState {
    /// Active slide, always `< slide_count`
    current_index: usize,

    slide_count: usize,

    /// Values from every form slide visited, never cleared mid-flow
    form_data: FormData,

    /// Whether a submit hook is running
    is_submitting: bool,

    /// Errors from the last validation pass
    errors: FieldErrors,

    phase: FlowPhase,
}

impl FlowState {
    /// Create a state positioned on `initial_index`
    pub(crate) fn new(slide_count: usize, initial_index: usize) -> Self {
        debug_assert!(initial_index < slide_count);
        Self {
            current_index: initial_index,
            slide_count,
            form_data: FormData::new(),
            is_submitting: false,
            errors: FieldErrors::new(),
            phase: FlowPhase::Active,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn form_data(&self) -> &FormData {
        &self.form_data
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn phase(&self) -> FlowPhase {
        self.phase
    }

    /// Check if the flow still accepts navigation
    pub fn is_active(&self) -> bool {
        self.phase == FlowPhase::Active
    }

    pub fn is_finished(&self) -> bool {
        self.phase == FlowPhase::Finished
    }

    pub fn is_last_slide(&self) -> bool {
        self.current_index + 1 == self.slide_count
    }

    /// Fraction of slides reached (0.0-1.0)
    pub fn progress(&self) -> f32 {
        if self.is_finished() {
            return 1.0;
        }
        (self.current_index + 1) as f32 / self.slide_count as f32
    }

    /// Move to `index`, returning the previous one
    pub(crate) fn set_index(&mut self, index: usize) -> usize {
        debug_assert!(index < self.slide_count);
        std::mem::replace(&mut self.current_index, index)
    }

    /// Merge one value and clear its error
    pub(crate) fn update_field(&mut self, key: String, value: FormValue) {
        self.errors.shift_remove(&key);
        self.form_data.insert(key, value);
    }

    pub(crate) fn set_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    pub(crate) fn set_submitting(&mut self, submitting: bool) {
        self.is_submitting = submitting;
    }

    pub(crate) fn set_phase(&mut self, phase: FlowPhase) {
        self.phase = phase;
    }
}
