//! Integration tests for joyroute-validation
//!
//! Covers the engine contracts end to end:
//! - Per-field evaluation order and short-circuiting
//! - Empty-value handling for required and optional fields
//! - Form-level aggregation keyed by the rules map
//! - The shipped rule registry with its exact messages

use joyroute_validation::{
    has_errors, rules, validate_field, validate_form, CheckOutcome, FormErrors, Matcher,
    ValidationRule,
};
use pretty_assertions::assert_eq;
use regex::Regex;
use rstest::rstest;
use std::collections::HashMap;

#[rstest]
#[case("test@example.com", None)]
#[case("user.name+tag@domain.co.uk", None)]
#[case("invalid.email", Some("Please enter a valid email address"))]
#[case("@example.com", Some("Please enter a valid email address"))]
#[case("", Some("Email is required"))]
fn test_email_rule_cases(#[case] value: &str, #[case] expected: Option<&str>) {
    assert_eq!(
        validate_field(value, &rules::email()),
        expected.map(String::from)
    );
}

#[rstest]
#[case("password123", None)]
#[case("Password1", None)]
#[case("password", Some("Password must contain at least one letter and one number"))]
#[case("12345678", Some("Password must contain at least one letter and one number"))]
#[case("pass1", Some("Password must be at least 8 characters"))]
#[case("", Some("Password is required"))]
fn test_password_rule_cases(#[case] value: &str, #[case] expected: Option<&str>) {
    assert_eq!(
        validate_field(value, &rules::password()),
        expected.map(String::from)
    );
}

#[test]
fn test_order_min_length_beats_pattern() {
    // "ab" violates both the length bound and the pattern; the length
    // message must be the one reported
    let rule = ValidationRule::new()
        .min_length(5, "Too short")
        .pattern(Matcher::Regex(Regex::new(r"^\d+$").unwrap()), "Numbers only");

    assert_eq!(validate_field("ab", &rule), Some("Too short".to_string()));
}

#[test]
fn test_order_pattern_beats_custom_check() {
    let rule = ValidationRule::new()
        .pattern(Matcher::Regex(Regex::new(r"^\d+$").unwrap()), "Numbers only")
        .validate_with(|_| CheckOutcome::FailWith("Custom failure".to_string()));

    assert_eq!(validate_field("abc", &rule), Some("Numbers only".to_string()));
    // Once the pattern passes, the custom check runs
    assert_eq!(validate_field("123", &rule), Some("Custom failure".to_string()));
}

#[test]
fn test_optional_empty_value_passes_everything() {
    let rule = ValidationRule::new()
        .min_length(5, "Too short")
        .max_length(2, "Too long")
        .pattern(Matcher::Regex(Regex::new(r"^\d+$").unwrap()), "Numbers only")
        .validate_with(|_| CheckOutcome::Fail);

    assert_eq!(validate_field("", &rule), None);
}

#[test]
fn test_validation_is_idempotent() {
    let rule = rules::password();
    let runs: Vec<Option<String>> = (0..3).map(|_| validate_field("password", &rule)).collect();
    assert_eq!(runs[0], runs[1]);
    assert_eq!(runs[1], runs[2]);
}

#[test]
fn test_validate_form_reports_exactly_the_failing_fields() {
    let mut data = HashMap::new();
    data.insert("email".to_string(), "bad".to_string());
    data.insert("password".to_string(), "short".to_string());

    let mut rule_table = HashMap::new();
    rule_table.insert("email".to_string(), rules::email());
    rule_table.insert("password".to_string(), rules::password());

    let errors = validate_form(&data, &rule_table);

    let mut expected = FormErrors::new();
    expected.insert(
        "email".to_string(),
        "Please enter a valid email address".to_string(),
    );
    expected.insert(
        "password".to_string(),
        "Password must be at least 8 characters".to_string(),
    );
    assert_eq!(errors, expected);
}

#[test]
fn test_validate_form_valid_data_yields_empty_map() {
    let mut data = HashMap::new();
    data.insert("email".to_string(), "test@example.com".to_string());
    data.insert("password".to_string(), "password123".to_string());

    let mut rule_table = HashMap::new();
    rule_table.insert("email".to_string(), rules::email());
    rule_table.insert("password".to_string(), rules::password());

    let errors = validate_form(&data, &rule_table);
    assert!(errors.is_empty());
    assert!(!has_errors(&errors));
}

#[test]
fn test_validate_form_ignores_fields_without_rules() {
    let mut data = HashMap::new();
    data.insert("email".to_string(), "test@example.com".to_string());
    data.insert("extra".to_string(), "anything at all".to_string());

    let mut rule_table = HashMap::new();
    rule_table.insert("email".to_string(), rules::email());

    let errors = validate_form(&data, &rule_table);
    assert!(errors.is_empty());
}

#[test]
fn test_confirm_password_captures_reference() {
    let rule = rules::confirm_password("password123");

    assert_eq!(validate_field("password123", &rule), None);
    assert_eq!(
        validate_field("different", &rule),
        Some("Passwords do not match".to_string())
    );

    // A new rule built against a new reference is independent
    let rotated = rules::confirm_password("hunter2hunter2");
    assert_eq!(validate_field("hunter2hunter2", &rotated), None);
    assert_eq!(
        validate_field("password123", &rotated),
        Some("Passwords do not match".to_string())
    );
}

#[test]
fn test_has_errors() {
    assert!(!has_errors(&FormErrors::new()));

    let mut errors = FormErrors::new();
    errors.insert("email".to_string(), "Invalid email".to_string());
    assert!(has_errors(&errors));

    errors.insert("password".to_string(), "Error".to_string());
    assert!(has_errors(&errors));
}
