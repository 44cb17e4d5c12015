//! End-to-end tests for the storytime binary.

use super::test_utils::run_cli;
use std::fs;
use storytime::provider::PLACEHOLDER_STORY;
use tempfile::TempDir;

#[test]
fn test_generate_without_api_key_reports_unavailable() {
    let home = TempDir::new().unwrap();
    let output = run_cli(home.path(), None, &["generate", "Tell me about Stoicism"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Provider unavailable: Gemini API client is not initialized."),
        "stderr={}",
        stderr
    );
    assert!(
        stderr.contains("API_KEY is not defined. Gemini API features will be unavailable."),
        "startup warning missing: {}",
        stderr
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn test_generate_with_api_key_prints_story() {
    let home = TempDir::new().unwrap();
    let output = run_cli(
        home.path(),
        Some("test-key"),
        &["--quiet", "generate", "Tell me about Stoicism"],
    );

    assert!(
        output.status.success(),
        "stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), PLACEHOLDER_STORY);
}

#[test]
fn test_generate_blank_prompt_is_invalid() {
    let home = TempDir::new().unwrap();
    let output = run_cli(home.path(), Some("test-key"), &["--quiet", "generate", "   "]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid argument: Prompt cannot be empty."), "stderr={}", stderr);
}

#[test]
fn test_generate_json_format() {
    let home = TempDir::new().unwrap();
    let output = run_cli(
        home.path(),
        Some("test-key"),
        &["--quiet", "generate", "--format", "json", "Tell me about Stoicism"],
    );

    assert!(output.status.success());
    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body, serde_json::json!({ "text": PLACEHOLDER_STORY }));
}

#[test]
fn test_status_json_reflects_credential() {
    let home = TempDir::new().unwrap();

    let output = run_cli(home.path(), None, &["--quiet", "status", "--format", "json"]);
    assert!(output.status.success());
    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["gateway"], "unavailable");
    // Configured provider and model are reported even without a credential
    assert_eq!(body["provider"], "placeholder");
    assert_eq!(body["model"], "gemini-2.0-flash");

    let output = run_cli(home.path(), Some("k"), &["--quiet", "status", "--format", "json"]);
    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["gateway"], "ready");
    assert_eq!(body["provider"], "placeholder");
}

#[test]
fn test_unknown_output_format_fails() {
    let home = TempDir::new().unwrap();
    let output = run_cli(
        home.path(),
        Some("test-key"),
        &["--quiet", "generate", "--format", "yaml", "Tell me about Stoicism"],
    );

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid output format: yaml"), "{}", stderr);
}

#[test]
fn test_workspace_config_renames_credential_variable() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[provider]\napi_key_env = \"STORYTIME_TEST_KEY\"\n",
    )
    .unwrap();

    // API_KEY alone no longer configures the gateway
    let output = run_cli(home.path(), Some("k"), &["--quiet", "status", "--format", "json"]);
    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["gateway"], "unavailable");
    assert_eq!(body["api_key_env"], "STORYTIME_TEST_KEY");
}

#[test]
fn test_config_command_prints_effective_toml() {
    let home = TempDir::new().unwrap();
    let output = run_cli(home.path(), None, &["--quiet", "config"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("kind = \"placeholder\""), "stdout={}", stdout);
    assert!(stdout.contains("bind = \"127.0.0.1:8080\""), "stdout={}", stdout);
}

#[test]
fn test_invalid_config_file_aborts_startup() {
    let home = TempDir::new().unwrap();
    let config_file = home.path().join("bad.toml");
    fs::write(&config_file, "[provider]\nmodel = \"\"\n").unwrap();

    let output = run_cli(
        home.path(),
        Some("k"),
        &["--config", config_file.to_str().unwrap(), "status"],
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Model cannot be empty"), "stderr={}", stderr);
}

#[test]
fn test_file_logging_writes_startup_warning() {
    let home = TempDir::new().unwrap();
    let log_file = home.path().join("logs").join("storytime.log");

    let output = run_cli(
        home.path(),
        None,
        &[
            "--log-output",
            "file",
            "--log-file",
            log_file.to_str().unwrap(),
            "status",
        ],
    );
    assert!(output.status.success());

    let content = fs::read_to_string(&log_file).unwrap();
    assert!(content.contains("API_KEY is not defined"), "log={}", content);
    assert!(content.contains("StoryTime CLI starting"), "log={}", content);
}
