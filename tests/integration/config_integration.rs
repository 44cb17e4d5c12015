//! Configuration loading through the public ConfigLoader.

use std::fs;
use storytime::config::{ConfigLoader, ProviderKind};
use tempfile::TempDir;

#[test]
fn test_load_workspace_without_files_yields_defaults() {
    let workspace = TempDir::new().unwrap();
    let config = ConfigLoader::load(workspace.path()).unwrap();
    assert_eq!(config.provider.api_key_env, "API_KEY");
    assert_eq!(config.provider.request_timeout_secs, 120);
}

#[test]
fn test_load_workspace_gemini_settings() {
    let workspace = TempDir::new().unwrap();
    let config_dir = workspace.path().join("config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        r#"
[provider]
kind = "gemini"
model = "gemini-1.5-pro"
endpoint = "http://localhost:8089"

[logging]
output = "stdout"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load(workspace.path()).unwrap();
    assert_eq!(config.provider.kind, ProviderKind::Gemini);
    assert_eq!(config.provider.model, "gemini-1.5-pro");
    assert_eq!(config.provider.endpoint, "http://localhost:8089");
    assert_eq!(config.logging.output, "stdout");
}

#[test]
fn test_bad_bind_address_is_reported() {
    let workspace = TempDir::new().unwrap();
    let file = workspace.path().join("storytime.toml");
    fs::write(&file, "[server]\nbind = \"not-an-address\"\n").unwrap();

    let err = ConfigLoader::load_from_file(&file).unwrap_err();
    assert!(err.to_string().contains("not-an-address"), "{}", err);
}
