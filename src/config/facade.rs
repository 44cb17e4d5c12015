//! Config loader facade: assembles sources in precedence order and validates the result.

use super::merge::merge_policy;
use super::sources::{environment, global_file, workspace_file};
use super::GatewayConfig;
use crate::error::ApiError;
use config::builder::DefaultState;
use config::{ConfigBuilder, File, FileFormat};
use std::path::{Path, PathBuf};

/// Loads [`GatewayConfig`] from defaults, files and environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, then the user-level file, then workspace files, then `STORYTIME_*` env.
    pub fn load(workspace_root: &Path) -> Result<GatewayConfig, ApiError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder);
        let builder = workspace_file::add_to_builder(builder, workspace_root);
        Self::finish(environment::add_to_builder(builder))
    }

    /// Defaults, then exactly one required file, then `STORYTIME_*` env.
    pub fn load_from_file(path: &Path) -> Result<GatewayConfig, ApiError> {
        let builder = merge_policy::builder_with_defaults()?.add_source(
            File::from(path)
                .format(FileFormat::Toml)
                .required(true),
        );
        Self::finish(environment::add_to_builder(builder))
    }

    /// Location of the user-level config file, if the platform has one.
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<GatewayConfig, ApiError> {
        let config: GatewayConfig = builder.build()?.try_deserialize()?;

        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;

        Ok(config)
    }
}
