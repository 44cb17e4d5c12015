//! Generation Gateway
//!
//! Guarded call-through to the configured [`TextProvider`]. Whether the gateway is
//! usable is decided once, at construction, from the startup [`ClientConfiguration`]:
//! without a credential every call fails with `ProviderUnavailable` for the life of
//! the process. Calls share the provider handle read-only and need no locking.

use crate::config::{ClientConfiguration, ProviderSettings};
use crate::error::GenerationError;
use crate::provider::{ProviderFactory, TextProvider};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

const UNAVAILABLE_MESSAGE: &str = "Gemini API client is not initialized.";
const EMPTY_PROMPT_MESSAGE: &str = "Prompt cannot be empty.";

/// Provider handle, present only when a credential was resolved at startup.
#[derive(Clone)]
pub enum Client {
    Configured(Arc<dyn TextProvider>),
    Unconfigured,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Client::Configured(provider) => f
                .debug_struct("Configured")
                .field("provider", &provider.provider_name())
                .field("model", &provider.model_name())
                .finish(),
            Client::Unconfigured => f.write_str("Unconfigured"),
        }
    }
}

/// Lifetime state of a gateway; never changes after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GatewayState {
    Ready,
    Unavailable,
}

impl std::fmt::Display for GatewayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayState::Ready => f.write_str("ready"),
            GatewayState::Unavailable => f.write_str("unavailable"),
        }
    }
}

/// A prompt that is neither empty nor whitespace-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prompt<'a>(&'a str);

impl<'a> Prompt<'a> {
    pub fn parse(raw: &'a str) -> Result<Self, GenerationError> {
        if raw.trim().is_empty() {
            return Err(GenerationError::InvalidArgument(EMPTY_PROMPT_MESSAGE.to_string()));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

/// Successful generation output; the text is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    text: String,
}

impl GenerationResult {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

#[derive(Debug)]
pub struct GenerationGateway {
    client: Client,
    request_timeout: Duration,
}

impl GenerationGateway {
    pub fn new(client: Client, request_timeout: Duration) -> Self {
        Self {
            client,
            request_timeout,
        }
    }

    /// Build the gateway from startup configuration.
    ///
    /// A missing credential is not an error: it is logged once and the gateway
    /// stays `Unavailable`.
    pub fn from_startup(
        settings: &ProviderSettings,
        client_config: &ClientConfiguration,
    ) -> Result<Self, GenerationError> {
        let client = match client_config.credential() {
            Some(credential) => {
                let provider = ProviderFactory::create_client(settings, credential)?;
                info!(
                    provider = provider.provider_name(),
                    model = provider.model_name(),
                    "Generation gateway ready"
                );
                Client::Configured(provider)
            }
            None => {
                warn!(
                    "{} is not defined. Gemini API features will be unavailable.",
                    settings.api_key_env
                );
                Client::Unconfigured
            }
        };

        Ok(Self::new(client, settings.request_timeout()))
    }

    pub fn state(&self) -> GatewayState {
        match self.client {
            Client::Configured(_) => GatewayState::Ready,
            Client::Unconfigured => GatewayState::Unavailable,
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub async fn generate(&self, prompt: &str) -> Result<GenerationResult, GenerationError> {
        self.generate_with_cancellation(prompt, &CancellationToken::new())
            .await
    }

    /// Same contract as [`generate`](Self::generate); resolves to `Cancelled` if the
    /// token fires before the provider answers.
    pub async fn generate_with_cancellation(
        &self,
        prompt: &str,
        cancel: &CancellationToken,
    ) -> Result<GenerationResult, GenerationError> {
        let provider = match &self.client {
            Client::Configured(provider) => provider,
            Client::Unconfigured => {
                debug!("Generation rejected: no provider credential");
                return Err(GenerationError::ProviderUnavailable(
                    UNAVAILABLE_MESSAGE.to_string(),
                ));
            }
        };

        let prompt = Prompt::parse(prompt)?;

        debug!(
            provider = provider.provider_name(),
            model = provider.model_name(),
            prompt_chars = prompt.as_str().chars().count(),
            "Dispatching generation request"
        );

        let call = tokio::time::timeout(self.request_timeout, provider.generate_text(prompt.as_str()));
        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("Generation cancelled by caller");
                return Err(GenerationError::Cancelled);
            }
            outcome = call => outcome,
        };

        let text = match outcome {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                warn!(error = %e, provider = provider.provider_name(), "Provider call failed");
                return Err(e);
            }
            Err(_) => {
                warn!(
                    timeout_secs = self.request_timeout.as_secs(),
                    provider = provider.provider_name(),
                    "Provider call timed out"
                );
                return Err(GenerationError::ProviderTimeout(self.request_timeout));
            }
        };

        if text.trim().is_empty() {
            return Err(GenerationError::ProviderError(
                "Provider returned an empty response".to_string(),
            ));
        }

        Ok(GenerationResult { text })
    }
}
