//! Merge rules: defaults, override order, conflict handling.
//!
//! Later sources win key by key; tables are merged, not replaced.

use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("provider.kind", "placeholder")?
        .set_default("provider.model", "gemini-2.0-flash")?
        .set_default("provider.endpoint", "https://generativelanguage.googleapis.com")?
        .set_default("provider.api_key_env", "API_KEY")?
        .set_default("provider.request_timeout_secs", 120_i64)?
        .set_default("provider.connect_timeout_secs", 10_i64)?
        .set_default("server.bind", "127.0.0.1:8080")
}
