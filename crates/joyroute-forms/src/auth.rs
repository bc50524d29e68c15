// File: src/auth.rs
// Purpose: Authentication seam and the simulated stand-in backend

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Failure reported by an authentication backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("email is already registered")]
    EmailTaken,
}

/// Payload for a signup attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Backend seam for the auth forms.
///
/// The shipped implementation is simulated; a real client implements this
/// trait and drops in without touching the forms.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<(), AuthError>;

    async fn register(&self, request: &SignupRequest) -> Result<(), AuthError>;
}

/// Stand-in backend: waits a fixed delay, then resolves deterministically
#[derive(Debug, Clone)]
pub struct SimulatedAuth {
    latency: Duration,
    reject: bool,
}

impl SimulatedAuth {
    /// Backend that accepts every attempt after the given delay
    pub fn accepting(latency: Duration) -> Self {
        Self {
            latency,
            reject: false,
        }
    }

    /// Backend that rejects every attempt after the given delay
    pub fn rejecting(latency: Duration) -> Self {
        Self {
            latency,
            reject: true,
        }
    }

    /// Accepting backend with the configured latency
    pub fn from_config(config: &crate::config::AuthConfig) -> Self {
        Self::accepting(Duration::from_millis(config.simulated_latency_ms))
    }
}

#[async_trait]
impl Authenticator for SimulatedAuth {
    async fn login(&self, email: &str, _password: &str) -> Result<(), AuthError> {
        tokio::time::sleep(self.latency).await;
        if self.reject {
            tracing::debug!(email, "simulated login rejected");
            return Err(AuthError::InvalidCredentials);
        }
        tracing::debug!(email, "simulated login accepted");
        Ok(())
    }

    async fn register(&self, request: &SignupRequest) -> Result<(), AuthError> {
        tokio::time::sleep(self.latency).await;
        if self.reject {
            tracing::debug!(email = %request.email, "simulated signup rejected");
            return Err(AuthError::EmailTaken);
        }
        tracing::debug!(email = %request.email, "simulated signup accepted");
        Ok(())
    }
}
