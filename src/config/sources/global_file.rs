//! Global config file source: $XDG_CONFIG_HOME/storytime/config.toml
//! (platform config dir elsewhere).

use config::builder::DefaultState;
use config::{ConfigBuilder, File, FileFormat};
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

/// Path to global config file.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "storytime").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Add global config file source to builder if it exists.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    match global_config_path() {
        Some(path) if path.exists() => builder.add_source(
            File::from(path)
                .format(FileFormat::Toml)
                .required(false),
        ),
        Some(path) => {
            debug!(config_path = %path.display(), "No user-level configuration file");
            builder
        }
        None => builder,
    }
}
