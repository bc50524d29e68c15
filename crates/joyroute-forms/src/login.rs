// File: src/login.rs
// Purpose: Login form flow with field lifecycle and submit validation

use crate::auth::Authenticator;
use crate::form_state::FormState;
use crate::SubmitOutcome;
use joyroute_validation::{has_errors, rules, validate_form, FormErrors, PasswordPolicy, ValidationRule};
use std::collections::HashMap;

/// State machine behind the login page.
///
/// Fields are `email` and `password`. The remember-me checkbox is tracked
/// but plays no part in validation.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    state: FormState,
    policy: PasswordPolicy,
    remember_me: bool,
}

impl LoginForm {
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

    /// Rule table for this form, built per call so the password rule tracks
    /// the configured policy
    fn rules(&self) -> HashMap<String, ValidationRule> {
        HashMap::from([
            ("email".to_string(), rules::email()),
            ("password".to_string(), self.policy.rule()),
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

    pub fn set_remember_me(&mut self, remember: bool) {
        self.remember_me = remember;
    }

    pub fn remember_me(&self) -> bool {
        self.remember_me
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Validate every field and, if clean, attempt the login.
    ///
    /// A backend refusal replaces the displayed errors with a single
    /// credentials message on the email field.
    pub async fn submit<A: Authenticator>(&mut self, auth: &A) -> SubmitOutcome {
        let errors = validate_form(self.state.values(), &self.rules());
        let failed = has_errors(&errors);
        self.state.set_errors(errors);

        if failed {
            tracing::debug!(errors = ?self.state.errors(), "login rejected by validation");
            return SubmitOutcome::Invalid;
        }

        let email = self.state.value("email").to_string();
        let password = self.state.value("password").to_string();

        match auth.login(&email, &password).await {
            Ok(()) => {
                tracing::info!(email = %email, "login successful");
                SubmitOutcome::Accepted
            }
            Err(error) => {
                tracing::warn!(email = %email, %error, "login failed");
                let mut errors = FormErrors::new();
                errors.insert("email".to_string(), "Invalid email or password".to_string());
                self.state.set_errors(errors);
                SubmitOutcome::Rejected
            }
        }
    }
}
