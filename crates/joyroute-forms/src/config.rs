// File: src/config.rs
// Purpose: Configuration parsing from joyroute.toml

use anyhow::{Context, Result};
use joyroute_validation::PasswordPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Forms configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormsConfig {
    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub validation: ValidationConfig,
}

/// Simulated authentication backend settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Delay applied to every simulated auth call, in milliseconds
    #[serde(default = "default_latency_ms")]
    pub simulated_latency_ms: u64,
}

/// Validation behavior settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ValidationConfig {
    /// Which password rule the forms apply
    #[serde(default)]
    pub password_policy: PasswordPolicy,
}

fn default_latency_ms() -> u64 {
    1500
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: default_latency_ms(),
        }
    }
}

impl FormsConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing or empty file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FormsConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from the default path (./joyroute.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("joyroute.toml")
    }
}
