// File: src/engine.rs
// Purpose: Field and form validation with first-failure-wins semantics

use crate::rule::{CheckOutcome, ValidationRule, GENERIC_FAILURE};
use std::collections::HashMap;

/// Errors keyed by field name; a field absent from the map is valid
pub type FormErrors = HashMap<String, String>;

/// Validate a single value against a rule.
///
/// Constraints run in a fixed order (required, min length, max length,
/// pattern, custom check) and the first failure is returned. An empty value
/// on a field that is not required passes without running the remaining
/// constraints.
pub fn validate_field(value: &str, rule: &ValidationRule) -> Option<String> {
    if rule.required.is_required() && value.trim().is_empty() {
        return Some(rule.required.message().to_string());
    }

    // Remaining constraints only apply once a value is present
    if value.is_empty() {
        return None;
    }

    if let Some(min) = &rule.min_length {
        if value.chars().count() < min.value {
            return Some(min.message.clone());
        }
    }

    if let Some(max) = &rule.max_length {
        if value.chars().count() > max.value {
            return Some(max.message.clone());
        }
    }

    if let Some(pattern) = &rule.pattern {
        if !pattern.matcher.is_match(value) {
            return Some(pattern.message.clone());
        }
    }

    if let Some(check) = &rule.validate {
        match check(value) {
            CheckOutcome::Pass => {}
            CheckOutcome::Fail => return Some(GENERIC_FAILURE.to_string()),
            CheckOutcome::FailWith(message) => return Some(message),
        }
    }

    None
}

/// Validate a map of field values against a map of rules.
///
/// Iteration is driven by the rules map: fields present in `data` without a
/// rule are never validated, and a field missing from `data` validates as an
/// empty value. Only failing fields appear in the result.
pub fn validate_form(
    data: &HashMap<String, String>,
    rules: &HashMap<String, ValidationRule>,
) -> FormErrors {
    let mut errors = FormErrors::new();

    for (field, rule) in rules {
        let value = data.get(field).map(String::as_str).unwrap_or("");
        if let Some(message) = validate_field(value, rule) {
            errors.insert(field.clone(), message);
        }
    }

    errors
}

/// Check whether any field failed.
///
/// This tests key presence, not message content: an entry holding an empty
/// string still counts as an error. Callers that populate the map through
/// `validate_form` never insert empty messages.
pub fn has_errors(errors: &FormErrors) -> bool {
    !errors.is_empty()
}
