// JoyRoute auth form flows
// Login and signup state machines built on the validation engine

pub mod auth;
pub mod config;
pub mod form_state;
pub mod login;
pub mod signup;

// Re-export the validation engine for callers that build their own rules
pub use joyroute_validation as validation;

pub use auth::{AuthError, Authenticator, SignupRequest, SimulatedAuth};
pub use config::{AuthConfig, FormsConfig, ValidationConfig};
pub use form_state::FormState;
pub use login::LoginForm;
pub use signup::SignupForm;

/// Result of a submit attempt on one of the auth forms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed and the backend accepted the attempt
    Accepted,
    /// One or more fields failed validation; errors are recorded on the form
    Invalid,
    /// The backend refused the attempt; the failure is shown on the email field
    Rejected,
    /// Signup only: the terms checkbox must be ticked before anything runs
    TermsRequired,
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }
}
