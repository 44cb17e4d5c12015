//! StoryTime CLI Binary
//!
//! Command-line host for the story-generation gateway.

use clap::Parser;
use std::process;
use storytime::cli::{Cli, RunContext};
use storytime::config::GatewayConfig;
use storytime::logging::{init_logging, LoggingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match RunContext::load_config(&cli.workspace, cli.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", storytime::cli::map_error(&e));
            process::exit(1);
        }
    };

    // Initialize logging before the gateway so the startup warning is recorded
    let logging_config = build_logging_config(&cli, &config);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("StoryTime CLI starting");

    let context = match RunContext::new(config) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error initializing gateway: {}", e);
            eprintln!("{}", storytime::cli::map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command).await {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", storytime::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from the config file and CLI flags.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, config: &GatewayConfig) -> LoggingConfig {
    let mut logging = config.logging.clone();

    if cli.quiet {
        logging.enabled = false;
    }
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        logging.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        logging.file = Some(file.clone());
    }

    logging
}
