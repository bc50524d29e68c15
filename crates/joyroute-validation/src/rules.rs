// File: src/rules.rs
// Purpose: Reusable rule builders for the common JoyRoute form fields

use crate::patterns::{is_medium_password, is_strong_password, EMAIL_REGEX, USERNAME_REGEX};
use crate::rule::{CheckOutcome, Matcher, ValidationRule};
use serde::{Deserialize, Serialize};

/// Rule for email fields
pub fn email() -> ValidationRule {
    ValidationRule::new()
        .required_with("Email is required")
        .pattern(
            Matcher::Regex(EMAIL_REGEX.clone()),
            "Please enter a valid email address",
        )
}

/// Rule for password fields under the medium policy
pub fn password() -> ValidationRule {
    ValidationRule::new()
        .required_with("Password is required")
        .min_length(8, "Password must be at least 8 characters")
        .pattern(
            Matcher::Predicate(is_medium_password),
            "Password must contain at least one letter and one number",
        )
}

/// Rule for password fields under the strong policy
pub fn strong_password() -> ValidationRule {
    ValidationRule::new()
        .required_with("Password is required")
        .min_length(8, "Password must be at least 8 characters")
        .pattern(
            Matcher::Predicate(is_strong_password),
            "Password must contain uppercase, lowercase, number, and special character",
        )
}

/// Rule for display-name fields
pub fn name() -> ValidationRule {
    ValidationRule::new()
        .required_with("Name is required")
        .min_length(2, "Name must be at least 2 characters")
        .max_length(50, "Name must not exceed 50 characters")
}

/// Rule for username fields
pub fn username() -> ValidationRule {
    ValidationRule::new()
        .required_with("Username is required")
        .min_length(3, "Username must be at least 3 characters")
        .max_length(20, "Username must not exceed 20 characters")
        .pattern(
            Matcher::Regex(USERNAME_REGEX.clone()),
            "Username can only contain letters, numbers, hyphens, and underscores",
        )
}

/// Rule for password confirmation fields.
///
/// The reference password is captured when the rule is built, so rebuild the
/// rule whenever the password being confirmed may have changed.
pub fn confirm_password(reference: impl Into<String>) -> ValidationRule {
    let reference = reference.into();
    ValidationRule::new()
        .required_with("Please confirm your password")
        .validate_with(move |value| {
            if value == reference {
                CheckOutcome::Pass
            } else {
                CheckOutcome::FailWith("Passwords do not match".to_string())
            }
        })
}

/// Password strength policies offered by the registry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordPolicy {
    #[default]
    Medium,
    Strong,
}

impl PasswordPolicy {
    /// Parse a policy name; unknown names fall back to medium
    pub fn parse(name: &str) -> Self {
        match name {
            "strong" => PasswordPolicy::Strong,
            _ => PasswordPolicy::Medium,
        }
    }

    /// The registry rule for this policy
    pub fn rule(&self) -> ValidationRule {
        match self {
            PasswordPolicy::Medium => password(),
            PasswordPolicy::Strong => strong_password(),
        }
    }
}
