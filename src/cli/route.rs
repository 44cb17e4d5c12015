//! CLI route: single route table and run context.

use crate::api::{self, GenerateResponse};
use crate::cli::output::{format_status_json, format_status_text, render_json, OutputFormat};
use crate::cli::parse::Commands;
use crate::config::{ClientConfiguration, ConfigLoader, GatewayConfig};
use crate::error::ApiError;
use crate::gateway::GenerationGateway;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Runtime context for CLI execution: effective configuration and the gateway
/// built from it. The credential is resolved exactly once, here.
pub struct RunContext {
    config: GatewayConfig,
    gateway: Arc<GenerationGateway>,
}

impl RunContext {
    /// Load configuration from an explicit file or from the workspace layers.
    pub fn load_config(
        workspace_root: &Path,
        config_path: Option<&PathBuf>,
    ) -> Result<GatewayConfig, ApiError> {
        match config_path {
            Some(path) => ConfigLoader::load_from_file(path),
            None => ConfigLoader::load(workspace_root),
        }
    }

    /// Build the context, reading the credential from the process environment.
    pub fn new(config: GatewayConfig) -> Result<Self, ApiError> {
        let client_config = ClientConfiguration::from_env(&config.provider.api_key_env);
        Self::with_client_configuration(config, &client_config)
    }

    pub fn with_client_configuration(
        config: GatewayConfig,
        client_config: &ClientConfiguration,
    ) -> Result<Self, ApiError> {
        let gateway = GenerationGateway::from_startup(&config.provider, client_config)?;
        Ok(Self {
            config,
            gateway: Arc::new(gateway),
        })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn gateway(&self) -> Arc<GenerationGateway> {
        Arc::clone(&self.gateway)
    }

    /// Execute a command and return its stdout text.
    pub async fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Generate { prompt, format } => {
                let format = OutputFormat::parse(format)?;
                let result = self.gateway.generate(prompt).await?;
                match format {
                    OutputFormat::Json => render_json(&GenerateResponse::from_result(Ok(result))),
                    OutputFormat::Text => Ok(result.into_text()),
                }
            }
            Commands::Serve { bind } => {
                let addr = self.resolve_bind(bind.as_deref())?;
                api::serve(self.gateway(), addr).await?;
                Ok("Server stopped".to_string())
            }
            Commands::Status { format } => Ok(match OutputFormat::parse(format)? {
                OutputFormat::Json => format_status_json(&self.gateway, &self.config),
                OutputFormat::Text => format_status_text(&self.gateway, &self.config),
            }),
            Commands::Config => toml::to_string_pretty(&self.config)
                .map(|s| s.trim_end().to_string())
                .map_err(|e| ApiError::OutputError(format!("Failed to render config: {}", e))),
        }
    }

    fn resolve_bind(&self, bind: Option<&str>) -> Result<SocketAddr, ApiError> {
        let addr = match bind {
            Some(bind) => bind
                .parse()
                .map_err(|e| ApiError::ConfigError(format!("Invalid bind address '{}': {}", bind, e)))?,
            None => self.config.server.bind_addr().map_err(ApiError::ConfigError)?,
        };
        info!(%addr, "Resolved bind address");
        Ok(addr)
    }
}
