// JoyRoute validation engine
// Declarative per-field rules with first-failure-wins evaluation

pub mod engine;
pub mod patterns;
pub mod rule;
pub mod rules;

pub use engine::{has_errors, validate_field, validate_form, FormErrors};
pub use rule::{Check, CheckOutcome, LengthLimit, Matcher, PatternRule, Required, ValidationRule};
pub use rules::PasswordPolicy;
