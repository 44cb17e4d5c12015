//! Shared helpers for integration tests.

use async_trait::async_trait;
use std::path::Path;
use std::process::{Command, Output};
use std::sync::atomic::{AtomicUsize, Ordering};
use storytime::provider::TextProvider;
use storytime::GenerationError;

/// Provider that echoes the prompt back and counts calls.
#[derive(Default)]
pub struct EchoProvider {
    calls: AtomicUsize,
}

impl EchoProvider {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextProvider for EchoProvider {
    async fn generate_text(&self, prompt: &str) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("A story about: {}", prompt))
    }

    fn provider_name(&self) -> &str {
        "echo"
    }

    fn model_name(&self) -> &str {
        "echo-1"
    }
}

/// Run the CLI binary in an isolated environment rooted at `home`.
/// `api_key` is exported as API_KEY when given; otherwise API_KEY is removed.
pub fn run_cli(home: &Path, api_key: Option<&str>, args: &[&str]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_storytime"));
    command
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_DATA_HOME", home.join("data"))
        .env_remove("API_KEY")
        .env_remove("STORYTIME_LOG")
        .env_remove("STORYTIME_LOG_OUTPUT")
        .env_remove("STORYTIME_LOG_FORMAT")
        .env_remove("STORYTIME_ENV")
        .env_remove("STORYTIME_PROVIDER__KIND")
        .arg("--workspace")
        .arg(home)
        .args(args);
    if let Some(key) = api_key {
        command.env("API_KEY", key);
    }
    command.output().unwrap()
}
