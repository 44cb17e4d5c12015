//! Configuration System
//!
//! Layered configuration for the generation gateway host: built-in defaults, the
//! user-level file, workspace files and `STORYTIME_*` environment overrides. The
//! provider credential is resolved separately, once, by [`ClientConfiguration`].

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

pub use crate::provider::{ProviderKind, ProviderSettings};

mod credential;
mod facade;
mod merge;
mod sources;

pub use credential::{ClientConfiguration, Credential};
pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Generation provider settings
    #[serde(default)]
    pub provider: ProviderSettings,

    /// HTTP surface settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP surface configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address for `storytime serve`
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> Result<SocketAddr, String> {
        self.bind
            .parse()
            .map_err(|e| format!("Invalid bind address '{}': {}", self.bind, e))
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Provider(String),
    Server(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Provider(msg) => write!(f, "Provider: {}", msg),
            ValidationError::Server(msg) => write!(f, "Server: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl GatewayConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors: Vec<ValidationError> = self
            .provider
            .validate()
            .into_iter()
            .map(ValidationError::Provider)
            .collect();

        if let Err(e) = self.server.bind_addr() {
            errors.push(ValidationError::Server(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
