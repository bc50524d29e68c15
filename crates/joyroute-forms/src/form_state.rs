// File: src/form_state.rs
// Purpose: Form state with current values, displayed errors, and touch tracking

use joyroute_validation::{validate_field, FormErrors, ValidationRule};
use std::collections::{HashMap, HashSet};

/// Mutable state behind a form: the values as typed, the errors currently
/// displayed, and which fields the user has visited.
///
/// The validation engine itself is stateless, so clearing a field's error
/// when the user edits it again is handled here, per the engine's caller
/// contract.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: HashMap<String, String>,
    errors: FormErrors,
    touched: HashSet<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update a field and clear its displayed error
    pub fn set_value(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(field.to_string(), value.into());
        self.errors.remove(field);
    }

    /// Current value of a field, empty if never set
    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }

    /// Mark a field visited and validate it, recording the first failure.
    /// A field that passes keeps whatever error is already displayed.
    pub fn blur(&mut self, field: &str, rule: &ValidationRule) {
        self.touched.insert(field.to_string());
        if let Some(message) = validate_field(self.value(field), rule) {
            self.errors.insert(field.to_string(), message);
        }
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.contains(field)
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Replace the displayed errors wholesale, as a submit pass does
    pub fn set_errors(&mut self, errors: FormErrors) {
        self.errors = errors;
    }

    pub fn has_errors(&self) -> bool {
        joyroute_validation::has_errors(&self.errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use joyroute_validation::rules;

    #[test]
    fn test_empty_state() {
        let state = FormState::new();
        assert_eq!(state.value("email"), "");
        assert!(!state.has_errors());
        assert!(state.error("email").is_none());
        assert!(!state.is_touched("email"));
    }

    #[test]
    fn test_set_value_clears_displayed_error() {
        let mut state = FormState::new();
        state.blur("email", &rules::email());
        assert!(state.has_error("email"));

        state.set_value("email", "t");
        assert!(!state.has_error("email"));
        assert_eq!(state.value("email"), "t");
    }

    #[test]
    fn test_set_value_only_clears_its_own_field() {
        let mut state = FormState::new();
        state.blur("email", &rules::email());
        state.blur("password", &rules::password());
        assert!(state.has_error("email"));
        assert!(state.has_error("password"));

        state.set_value("email", "test@example.com");
        assert!(!state.has_error("email"));
        assert!(state.has_error("password"));
    }

    #[test]
    fn test_blur_records_first_failure() {
        let mut state = FormState::new();
        state.set_value("password", "password");
        state.blur("password", &rules::password());

        assert!(state.is_touched("password"));
        assert_eq!(
            state.error("password"),
            Some("Password must contain at least one letter and one number")
        );
    }

    #[test]
    fn test_blur_on_valid_field_keeps_existing_error() {
        let mut state = FormState::new();
        let mut errors = FormErrors::new();
        errors.insert("email".to_string(), "Invalid email or password".to_string());
        state.set_errors(errors);

        // The value itself validates, but blur does not clear; only an edit does
        state.values.insert("email".to_string(), "test@example.com".to_string());
        state.blur("email", &rules::email());
        assert_eq!(state.error("email"), Some("Invalid email or password"));
    }

    #[test]
    fn test_set_errors_replaces_wholesale() {
        let mut state = FormState::new();
        state.blur("name", &rules::name());
        assert!(state.has_error("name"));

        let mut errors = FormErrors::new();
        errors.insert("email".to_string(), "Email is required".to_string());
        state.set_errors(errors);

        assert!(!state.has_error("name"));
        assert_eq!(state.error("email"), Some("Email is required"));
    }
}
