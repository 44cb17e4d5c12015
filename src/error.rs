//! Error types for the StoryTime generation gateway.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Stable failure categories surfaced to callers and on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// No credential was resolved at startup.
    ProviderUnavailable,
    /// Empty, whitespace-only or missing prompt.
    InvalidArgument,
    /// The remote provider call failed.
    ProviderError,
    /// The caller cancelled the request before the provider answered.
    Cancelled,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::ProviderUnavailable => "ProviderUnavailable",
            ErrorKind::InvalidArgument => "InvalidArgument",
            ErrorKind::ProviderError => "ProviderError",
            ErrorKind::Cancelled => "Cancelled",
        };
        f.write_str(name)
    }
}

/// Failures returned by `GenerationGateway::generate`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Provider request failed: {0}")]
    ProviderRequestFailed(String),

    #[error("Provider authentication failed: {0}")]
    ProviderAuthFailed(String),

    #[error("Provider rate limit exceeded: {0}")]
    ProviderRateLimit(String),

    #[error("Provider model not found: {0}")]
    ProviderModelNotFound(String),

    #[error("Provider request timed out after {0:?}")]
    ProviderTimeout(Duration),

    #[error("Generation cancelled")]
    Cancelled,
}

impl GenerationError {
    /// Project the detailed error onto its stable category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerationError::ProviderUnavailable(_) => ErrorKind::ProviderUnavailable,
            GenerationError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            GenerationError::ProviderError(_)
            | GenerationError::ProviderRequestFailed(_)
            | GenerationError::ProviderAuthFailed(_)
            | GenerationError::ProviderRateLimit(_)
            | GenerationError::ProviderModelNotFound(_)
            | GenerationError::ProviderTimeout(_) => ErrorKind::ProviderError,
            GenerationError::Cancelled => ErrorKind::Cancelled,
        }
    }
}

/// Host-level errors: configuration, logging, server and wrapped generation failures.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),

    #[error("Output error: {0}")]
    OutputError(String),

    #[error("Server I/O error: {0}")]
    ServerError(#[from] std::io::Error),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
