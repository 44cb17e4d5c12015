//! CLI output: format selection, error mapping and status presentation.

use crate::config::{ConfigLoader, GatewayConfig};
use crate::error::ApiError;
use crate::gateway::GenerationGateway;
use serde::Serialize;
use serde_json::json;

/// Rendering for `generate` and `status` results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(format: &str) -> Result<Self, ApiError> {
        match format {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ApiError::OutputError(format!(
                "Invalid output format: {} (must be 'json' or 'text')",
                format
            ))),
        }
    }
}

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    e.to_string()
}

/// Compact JSON for command results.
pub fn render_json<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value)
        .map_err(|e| ApiError::OutputError(format!("Failed to render JSON: {}", e)))
}

fn global_config_display() -> String {
    ConfigLoader::global_config_path()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "none".to_string())
}

pub fn format_status_text(gateway: &GenerationGateway, config: &GatewayConfig) -> String {
    format!(
        "Gateway:   {}\nProvider:  {}\nModel:     {}\nKey env:   {}\nTimeout:   {}s\nGlobal:    {}",
        gateway.state(),
        config.provider.kind,
        config.provider.model,
        config.provider.api_key_env,
        gateway.request_timeout().as_secs(),
        global_config_display()
    )
}

pub fn format_status_json(gateway: &GenerationGateway, config: &GatewayConfig) -> String {
    let value = json!({
        "gateway": gateway.state(),
        "provider": config.provider.kind,
        "model": config.provider.model,
        "api_key_env": config.provider.api_key_env,
        "request_timeout_secs": gateway.request_timeout().as_secs(),
        "global_config": ConfigLoader::global_config_path(),
    });
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}
