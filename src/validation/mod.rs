/// Form validation
///
/// Pure function over a field list and the collected form data. Fields are
/// checked independently; the error map keeps field order so repeated runs
/// produce identical output.

pub mod validators;

use crate::slides::{FieldErrors, FormData, FormFieldConfig, ValidationOutcome};

/// Validate `form_data` against `fields`, returning one message per failing field.
///
/// An empty map means every field passed.
pub fn validate(fields: &[FormFieldConfig], form_data: &FormData) -> FieldErrors {
    let mut errors = FieldErrors::new();

    for field in fields {
        if let Some(message) = validate_field(field, form_data) {
            errors.insert(field.key.clone(), message);
        }
    }

    errors
}

/// Validate a single field, `None` when it passes
pub fn validate_field(field: &FormFieldConfig, form_data: &FormData) -> Option<String> {
    let value = form_data.get(&field.key);
    let filled = value.map(|v| v.is_truthy()).unwrap_or(false);

    if field.required && !filled {
        return Some(format!("{} is required", field.label));
    }

    // Validators only run on values that are actually present
    let (Some(validator), Some(value)) = (field.validator.as_ref(), value) else {
        return None;
    };
    if !value.is_truthy() {
        return None;
    }

    match validator(value) {
        ValidationOutcome::Pass => None,
        ValidationOutcome::Fail => Some(format!("{} is invalid", field.label)),
        ValidationOutcome::Message(message) => Some(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slides::FormValue;

    fn data(pairs: &[(&str, &str)]) -> FormData {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), FormValue::from(*v)))
            .collect()
    }

    #[test]
    fn test_required_missing() {
        let fields = vec![FormFieldConfig::text("name", "Name").required()];
        let errors = validate(&fields, &FormData::new());

        assert_eq!(errors.len(), 1);
        assert_eq!(errors["name"], "Name is required");
    }

    #[test]
    fn test_required_empty_string_is_missing() {
        let fields = vec![FormFieldConfig::text("name", "Name").required()];
        let errors = validate(&fields, &data(&[("name", "")]));
        assert_eq!(errors["name"], "Name is required");
    }

    #[test]
    fn test_optional_missing_passes() {
        let fields = vec![FormFieldConfig::text("bio", "Bio")];
        assert!(validate(&fields, &FormData::new()).is_empty());
    }

    #[test]
    fn test_validator_message() {
        let fields = vec![FormFieldConfig::text("name", "Name")
            .validate_with(|v: &FormValue| {
                if v.to_string().len() < 3 {
                    ValidationOutcome::from("Name is too short")
                } else {
                    ValidationOutcome::Pass
                }
            })];

        let errors = validate(&fields, &data(&[("name", "Al")]));
        assert_eq!(errors["name"], "Name is too short");

        assert!(validate(&fields, &data(&[("name", "Alice")])).is_empty());
    }

    #[test]
    fn test_validator_false_is_generic_message() {
        let fields = vec![FormFieldConfig::text("age", "Age").validate_with(|_: &FormValue| false)];
        let errors = validate(&fields, &data(&[("age", "x")]));
        assert_eq!(errors["age"], "Age is invalid");
    }

    #[test]
    fn test_validator_skipped_when_absent() {
        let fields = vec![FormFieldConfig::text("age", "Age").validate_with(|_: &FormValue| false)];
        assert!(validate(&fields, &FormData::new()).is_empty());
    }

    #[test]
    fn test_required_wins_over_validator() {
        let fields = vec![FormFieldConfig::text("code", "Code")
            .required()
            .validate_with(|_: &FormValue| "never reached")];
        let errors = validate(&fields, &FormData::new());
        assert_eq!(errors["code"], "Code is required");
    }

    #[test]
    fn test_errors_follow_field_order() {
        let fields = vec![
            FormFieldConfig::text("b", "B").required(),
            FormFieldConfig::text("a", "A").required(),
            FormFieldConfig::text("c", "C").required(),
        ];
        let errors = validate(&fields, &FormData::new());
        let keys: Vec<&str> = errors.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }
}
