//! CLI parse: clap types for StoryTime. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// StoryTime CLI - story-generation gateway
#[derive(Parser, Debug)]
#[command(name = "storytime")]
#[command(about = "Story-generation gateway for the StoryTime reading platform")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (config/ is read from here)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a story for a prompt
    Generate {
        /// Prompt text
        prompt: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Serve the gateway over HTTP
    Serve {
        /// Bind address (defaults to server.bind from configuration)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Show gateway state and provider
    Status {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the effective configuration as TOML
    Config,
}
