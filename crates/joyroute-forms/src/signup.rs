// File: src/signup.rs
// Purpose: Signup form flow with the terms gate and password confirmation

use crate::auth::{Authenticator, SignupRequest};
use crate::form_state::FormState;
use crate::SubmitOutcome;
use joyroute_validation::{has_errors, rules, validate_form, FormErrors, PasswordPolicy, ValidationRule};
use std::collections::HashMap;

/// State machine behind the signup page.
///
/// Fields are `name`, `email`, `password`, and `confirm_password`. The terms
/// checkbox sits outside the rule table and gates submission separately.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    state: FormState,
    policy: PasswordPolicy,
    accepted_terms: bool,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form whose password field follows the given policy
    pub fn with_policy(policy: PasswordPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Rule table for this form. The confirmation rule is rebuilt against the
    /// password as currently typed, so it always compares against the latest
    /// value.
    fn rules(&self) -> HashMap<String, ValidationRule> {
        HashMap::from([
            ("name".to_string(), rules::name()),
            ("email".to_string(), rules::email()),
            ("password".to_string(), self.policy.rule()),
            (
                "confirm_password".to_string(),
                rules::confirm_password(self.state.value("password")),
            ),
        ])
    }

    /// Record a keystroke; clears the field's displayed error
    pub fn set_field(&mut self, field: &str, value: impl Into<String>) {
        self.state.set_value(field, value);
    }

    /// Validate a single field as focus leaves it
    pub fn blur_field(&mut self, field: &str) {
        if let Some(rule) = self.rules().get(field) {
            self.state.blur(field, rule);
        }
    }

    pub fn set_accepted_terms(&mut self, accepted: bool) {
        self.accepted_terms = accepted;
    }

    pub fn accepted_terms(&self) -> bool {
        self.accepted_terms
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Validate every field and, if clean, attempt the registration.
    ///
    /// While the terms checkbox is unticked the submit refuses before any
    /// field error is displayed or any backend call is made. A backend
    /// refusal replaces the displayed errors with a single message on the
    /// email field.
    pub async fn submit<A: Authenticator>(&mut self, auth: &A) -> SubmitOutcome {
        if !self.accepted_terms {
            tracing::debug!("signup blocked until terms are accepted");
            return SubmitOutcome::TermsRequired;
        }

        let errors = validate_form(self.state.values(), &self.rules());
        let failed = has_errors(&errors);
        self.state.set_errors(errors);

        if failed {
            tracing::debug!(errors = ?self.state.errors(), "signup rejected by validation");
            return SubmitOutcome::Invalid;
        }

        let request = SignupRequest {
            name: self.state.value("name").to_string(),
            email: self.state.value("email").to_string(),
            password: self.state.value("password").to_string(),
        };

        match auth.register(&request).await {
            Ok(()) => {
                tracing::info!(email = %request.email, "signup successful");
                SubmitOutcome::Accepted
            }
            Err(error) => {
                tracing::warn!(email = %request.email, %error, "signup failed");
                let mut errors = FormErrors::new();
                errors.insert(
                    "email".to_string(),
                    "This email is already registered".to_string(),
                );
                self.state.set_errors(errors);
                SubmitOutcome::Rejected
            }
        }
    }
}
