/// Ready-made field validators
///
/// Each helper returns a closure suitable for [`FormFieldConfig::validate_with`].
///
/// [`FormFieldConfig::validate_with`]: crate::slides::FormFieldConfig::validate_with

use regex::Regex;
use std::sync::OnceLock;

use crate::slides::{FormValue, ValidationOutcome};

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

/// Accepts text that looks like an email address
pub fn email() -> impl Fn(&FormValue) -> ValidationOutcome + Send + Sync + 'static {
    |value| match value.as_text() {
        Some(text) if email_regex().is_match(text.trim()) => ValidationOutcome::Pass,
        _ => ValidationOutcome::Message("Please enter a valid email address".to_string()),
    }
}

/// Accepts text with at least `min` characters
pub fn min_length(min: usize) -> impl Fn(&FormValue) -> ValidationOutcome + Send + Sync + 'static {
    move |value| {
        let len = value.to_string().chars().count();
        if len >= min {
            ValidationOutcome::Pass
        } else {
            ValidationOutcome::Message(format!("Must be at least {} characters", min))
        }
    }
}

/// Accepts numbers (or numeric text) within `min..=max`
pub fn number_range(
    min: f64,
    max: f64,
) -> impl Fn(&FormValue) -> ValidationOutcome + Send + Sync + 'static {
    move |value| match value.as_number() {
        Some(n) if (min..=max).contains(&n) => ValidationOutcome::Pass,
        Some(_) => ValidationOutcome::Message(format!("Must be between {} and {}", min, max)),
        None => ValidationOutcome::Fail,
    }
}

/// Accepts only values listed in `allowed`; lists must be a subset
pub fn one_of<I, S>(allowed: I) -> impl Fn(&FormValue) -> ValidationOutcome + Send + Sync + 'static
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let allowed: Vec<String> = allowed.into_iter().map(Into::into).collect();
    move |value| {
        let ok = match value {
            FormValue::Text(s) => allowed.contains(s),
            FormValue::List(items) => items.iter().all(|item| allowed.contains(item)),
            _ => false,
        };
        ValidationOutcome::from(ok)
    }
}
