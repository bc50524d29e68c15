// File: src/rule.rs
// Purpose: Declarative constraint model for a single form field

use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// Message used when a required field carries no custom message
pub(crate) const REQUIRED_MESSAGE: &str = "This field is required";

/// Message used when a custom check fails without supplying its own
pub(crate) const GENERIC_FAILURE: &str = "Validation failed";

/// Whether a field must be non-empty, and with which failure message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Required {
    /// Field may be left empty
    #[default]
    No,
    /// Field must be present; failures use the default message
    Yes,
    /// Field must be present; failures use the given message
    WithMessage(String),
}

impl Required {
    pub fn is_required(&self) -> bool {
        !matches!(self, Required::No)
    }

    /// Message reported when the requirement is violated
    pub fn message(&self) -> &str {
        match self {
            Required::WithMessage(message) => message,
            _ => REQUIRED_MESSAGE,
        }
    }
}

/// Length bound paired with its failure message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthLimit {
    pub value: usize,
    pub message: String,
}

/// How a pattern constraint decides whether a value matches
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Compiled regular expression tested against the whole value
    Regex(Regex),
    /// Named predicate for policies that need more than one pass over the value
    Predicate(fn(&str) -> bool),
}

impl Matcher {
    pub fn is_match(&self, value: &str) -> bool {
        match self {
            Matcher::Regex(regex) => regex.is_match(value),
            Matcher::Predicate(check) => check(value),
        }
    }
}

/// Pattern constraint with its failure message
#[derive(Debug, Clone)]
pub struct PatternRule {
    pub matcher: Matcher,
    pub message: String,
}

/// Outcome of a custom check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Pass,
    /// Failed; the generic failure message is reported
    Fail,
    /// Failed with a specific message
    FailWith(String),
}

/// Custom check invoked after every built-in constraint has passed
pub type Check = Arc<dyn Fn(&str) -> CheckOutcome + Send + Sync>;

/// Constraints for one field.
///
/// Constraints are evaluated in a fixed order: required, min length,
/// max length, pattern, custom check. The first failing constraint wins,
/// so at most one message is produced per validation call. A rule with no
/// constraints always passes.
#[derive(Clone, Default)]
pub struct ValidationRule {
    pub required: Required,
    pub min_length: Option<LengthLimit>,
    pub max_length: Option<LengthLimit>,
    pub pattern: Option<PatternRule>,
    pub validate: Option<Check>,
}

impl ValidationRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the field, reporting the default message on failure
    pub fn required(mut self) -> Self {
        self.required = Required::Yes;
        self
    }

    /// Require the field with a custom failure message
    pub fn required_with(mut self, message: impl Into<String>) -> Self {
        self.required = Required::WithMessage(message.into());
        self
    }

    pub fn min_length(mut self, value: usize, message: impl Into<String>) -> Self {
        self.min_length = Some(LengthLimit {
            value,
            message: message.into(),
        });
        self
    }

    pub fn max_length(mut self, value: usize, message: impl Into<String>) -> Self {
        self.max_length = Some(LengthLimit {
            value,
            message: message.into(),
        });
        self
    }

    pub fn pattern(mut self, matcher: Matcher, message: impl Into<String>) -> Self {
        self.pattern = Some(PatternRule {
            matcher,
            message: message.into(),
        });
        self
    }

    /// Attach a custom check, run last
    pub fn validate_with<F>(mut self, check: F) -> Self
    where
        F: Fn(&str) -> CheckOutcome + Send + Sync + 'static,
    {
        self.validate = Some(Arc::new(check));
        self
    }
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule")
            .field("required", &self.required)
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .field("pattern", &self.pattern)
            .field("validate", &self.validate.as_ref().map(|_| "<check>"))
            .finish()
    }
}
