/// Form slide fields and the values users enter into them

use async_trait::async_trait;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::error::SubmitError;

/// Values collected from form fields, keyed by field key in entry order.
pub type FormData = IndexMap<String, FormValue>;

/// Per-field error messages, keyed by field key in field order.
pub type FieldErrors = IndexMap<String, String>;

/// Validator attached to a single field.
pub type FieldValidator = Arc<dyn Fn(&FormValue) -> ValidationOutcome + Send + Sync>;

/// A value entered into a form field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl FormValue {
    /// Whether the value counts as "filled in" for a required field
    pub fn is_truthy(&self) -> bool {
        match self {
            FormValue::Bool(b) => *b,
            FormValue::Number(n) => *n != 0.0 && !n.is_nan(),
            FormValue::Text(s) => !s.is_empty(),
            FormValue::List(items) => !items.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FormValue::Number(n) => Some(*n),
            FormValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl From<&str> for FormValue {
    fn from(s: &str) -> Self {
        FormValue::Text(s.to_string())
    }
}

impl From<String> for FormValue {
    fn from(s: String) -> Self {
        FormValue::Text(s)
    }
}

impl From<f64> for FormValue {
    fn from(n: f64) -> Self {
        FormValue::Number(n)
    }
}

impl From<bool> for FormValue {
    fn from(b: bool) -> Self {
        FormValue::Bool(b)
    }
}

impl From<Vec<String>> for FormValue {
    fn from(items: Vec<String>) -> Self {
        FormValue::List(items)
    }
}

impl fmt::Display for FormValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormValue::Bool(b) => write!(f, "{}", b),
            FormValue::Number(n) => write!(f, "{}", n),
            FormValue::Text(s) => write!(f, "{}", s),
            FormValue::List(items) => write!(f, "{}", items.join(", ")),
        }
    }
}

/// Result of running a field validator.
///
/// Converts from `bool` (`false` = generic "is invalid" message) and from
/// strings (the string becomes the message).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Pass,
    Fail,
    Message(String),
}

impl From<bool> for ValidationOutcome {
    fn from(ok: bool) -> Self {
        if ok {
            ValidationOutcome::Pass
        } else {
            ValidationOutcome::Fail
        }
    }
}

impl From<String> for ValidationOutcome {
    fn from(message: String) -> Self {
        ValidationOutcome::Message(message)
    }
}

impl From<&str> for ValidationOutcome {
    fn from(message: &str) -> Self {
        ValidationOutcome::Message(message.to_string())
    }
}

/// Input kind of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Number,
    Email,
    Password,
    Select,
    #[serde(rename = "multiselect")]
    MultiSelect,
}

impl FieldType {
    /// Whether the field picks from `options` instead of free text
    pub fn is_choice(&self) -> bool {
        matches!(self, FieldType::Select | FieldType::MultiSelect)
    }
}

/// One choice of a select / multiselect field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl FieldOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Configuration of a single form field
#[derive(Clone)]
pub struct FormFieldConfig {
    pub key: String,
    pub label: String,
    pub placeholder: String,
    pub field_type: FieldType,
    pub required: bool,
    pub options: Vec<FieldOption>,
    pub validator: Option<FieldValidator>,
    pub multiline: bool,
    pub number_of_lines: Option<u32>,
}

impl FormFieldConfig {
    pub fn new(key: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            placeholder: String::new(),
            field_type,
            required: false,
            options: Vec::new(),
            validator: None,
            multiline: false,
            number_of_lines: None,
        }
    }

    pub fn text(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldType::Text)
    }

    pub fn select(
        key: impl Into<String>,
        label: impl Into<String>,
        options: Vec<FieldOption>,
    ) -> Self {
        let mut field = Self::new(key, label, FieldType::Select);
        field.options = options;
        field
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn multiline(mut self, lines: u32) -> Self {
        self.multiline = true;
        self.number_of_lines = Some(lines);
        self
    }

    /// Attach a validator; anything convertible into [`ValidationOutcome`] works
    pub fn validate_with<F, R>(mut self, validator: F) -> Self
    where
        F: Fn(&FormValue) -> R + Send + Sync + 'static,
        R: Into<ValidationOutcome>,
    {
        self.validator = Some(Arc::new(move |value| validator(value).into()));
        self
    }
}

impl fmt::Debug for FormFieldConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormFieldConfig")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("field_type", &self.field_type)
            .field("required", &self.required)
            .field("options", &self.options.len())
            .field("validator", &self.validator.is_some())
            .finish()
    }
}

/// Hook run when a valid form slide is advanced past.
///
/// Errors are logged by the controller and never block navigation.
#[async_trait]
pub trait SubmitHandler: Send + Sync {
    async fn submit(&self, data: FormData) -> Result<(), SubmitError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(FormValue::from("Ann").is_truthy());
        assert!(!FormValue::from("").is_truthy());
        assert!(!FormValue::Number(0.0).is_truthy());
        assert!(!FormValue::Number(f64::NAN).is_truthy());
        assert!(FormValue::Number(3.0).is_truthy());
        assert!(!FormValue::Bool(false).is_truthy());
        assert!(!FormValue::List(Vec::new()).is_truthy());
        assert!(FormValue::List(vec!["a".to_string()]).is_truthy());
    }

    #[test]
    fn test_outcome_conversions() {
        assert_eq!(ValidationOutcome::from(true), ValidationOutcome::Pass);
        assert_eq!(ValidationOutcome::from(false), ValidationOutcome::Fail);
        assert_eq!(
            ValidationOutcome::from("Too short"),
            ValidationOutcome::Message("Too short".to_string())
        );
    }

    #[test]
    fn test_form_value_untagged_json() {
        let mut data = FormData::new();
        data.insert("name".to_string(), FormValue::from("Ann"));
        data.insert("pages".to_string(), FormValue::Number(1500.0));
        data.insert(
            "tags".to_string(),
            FormValue::List(vec!["focus".to_string(), "tasks".to_string()]),
        );

        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Ann","pages":1500.0,"tags":["focus","tasks"]}"#
        );
    }

    #[test]
    fn test_field_type_names() {
        let t: FieldType = serde_json::from_str("\"multiselect\"").unwrap();
        assert_eq!(t, FieldType::MultiSelect);
        assert!(t.is_choice());
        assert!(!FieldType::Email.is_choice());
    }

    #[test]
    fn test_as_number_parses_text() {
        assert_eq!(FormValue::from(" 42 ").as_number(), Some(42.0));
        assert_eq!(FormValue::from("abc").as_number(), None);
    }
}
