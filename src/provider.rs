//! Text Provider Abstraction
//!
//! The generation gateway delegates to a [`TextProvider`]. Two implementations exist:
//! the placeholder, which answers with the fixed "not active" text and never leaves
//! the process, and the Gemini `generateContent` client.

use crate::config::Credential;
use crate::error::GenerationError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

pub mod gemini;

pub use gemini::GeminiClient;

/// Reply of the placeholder provider.
pub const PLACEHOLDER_STORY: &str = "Story generation is not active in this view.";

/// Which provider the gateway delegates to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Placeholder,
    Gemini,
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderKind::Placeholder => f.write_str("placeholder"),
            ProviderKind::Gemini => f.write_str("gemini"),
        }
    }
}

/// Provider section of the configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderSettings {
    #[serde(default)]
    pub kind: ProviderKind,

    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the Generative Language API
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_api_key_env() -> String {
    "API_KEY".to_string()
}

fn default_request_timeout_secs() -> u64 {
    120
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            kind: ProviderKind::default(),
            model: default_model(),
            endpoint: default_endpoint(),
            api_key_env: default_api_key_env(),
            request_timeout_secs: default_request_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl ProviderSettings {
    /// Returns every problem found, empty when valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.model.trim().is_empty() {
            errors.push("Model cannot be empty".to_string());
        }
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            errors.push(format!(
                "Endpoint must start with http:// or https://: {}",
                self.endpoint
            ));
        }
        if self.api_key_env.trim().is_empty() {
            errors.push("API key environment variable name cannot be empty".to_string());
        }
        if self.request_timeout_secs == 0 {
            errors.push("Request timeout must be greater than zero".to_string());
        }
        if self.connect_timeout_secs == 0 {
            errors.push("Connect timeout must be greater than zero".to_string());
        }

        errors
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

/// Generative-text provider the gateway delegates to
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Produce text for an already validated prompt
    async fn generate_text(&self, prompt: &str) -> Result<String, GenerationError>;

    fn provider_name(&self) -> &str;

    fn model_name(&self) -> &str;
}

/// Answers every prompt with [`PLACEHOLDER_STORY`].
#[derive(Debug, Clone, Default)]
pub struct PlaceholderProvider;

#[async_trait]
impl TextProvider for PlaceholderProvider {
    async fn generate_text(&self, _prompt: &str) -> Result<String, GenerationError> {
        tracing::debug!("Story generation is disabled; returning placeholder text");
        Ok(PLACEHOLDER_STORY.to_string())
    }

    fn provider_name(&self) -> &str {
        "placeholder"
    }

    fn model_name(&self) -> &str {
        "none"
    }
}

// Map transport-level failures to generation errors
pub(crate) fn map_http_error(error: reqwest::Error) -> GenerationError {
    if let Some(status) = error.status() {
        map_status_error(status, &error.to_string())
    } else if error.is_timeout() {
        GenerationError::ProviderRequestFailed(format!("Request timeout: {}", error))
    } else if error.is_connect() {
        GenerationError::ProviderRequestFailed(format!("Connection error: {}", error))
    } else {
        GenerationError::ProviderError(format!("HTTP error: {}", error))
    }
}

// Map a non-success status and its body to generation errors
pub(crate) fn map_status_error(status: StatusCode, body: &str) -> GenerationError {
    match status.as_u16() {
        401 | 403 => GenerationError::ProviderAuthFailed(format!("Authentication failed: {}", body)),
        429 => GenerationError::ProviderRateLimit(format!("Rate limit exceeded: {}", body)),
        404 => GenerationError::ProviderModelNotFound(format!("Model not found: {}", body)),
        _ => GenerationError::ProviderRequestFailed(format!(
            "Request failed with status {}: {}",
            status, body
        )),
    }
}

pub(crate) fn build_provider_http_client(
    connect_timeout: Duration,
    request_timeout: Duration,
) -> Result<Client, GenerationError> {
    Client::builder()
        .no_proxy()
        .connect_timeout(connect_timeout)
        .timeout(request_timeout)
        .build()
        .map_err(|e| GenerationError::ProviderError(format!("Failed to create HTTP client: {}", e)))
}

/// Builds the provider named by the settings
pub struct ProviderFactory;

impl ProviderFactory {
    pub fn create_client(
        settings: &ProviderSettings,
        credential: &Credential,
    ) -> Result<Arc<dyn TextProvider>, GenerationError> {
        match settings.kind {
            ProviderKind::Placeholder => Ok(Arc::new(PlaceholderProvider)),
            ProviderKind::Gemini => Ok(Arc::new(GeminiClient::new(
                settings.model.clone(),
                credential.clone(),
                settings.endpoint.clone(),
                settings.connect_timeout(),
                settings.request_timeout(),
            )?)),
        }
    }
}
