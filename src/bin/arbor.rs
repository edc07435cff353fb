//! Arbor CLI Binary
//!
//! Command-line entry point for the arbor virtual filesystem tree.

use clap::Parser;
use std::io;
use std::process;
use tracing::{error, info};

use arbor::cli::{map_error, Cli, RunContext};
use arbor::config::ConfigLoader;
use arbor::logging::{init_logging, LoggingConfig};

fn main() {
    let cli = Cli::parse();

    // Build logging config from CLI args and config file
    let logging_config = build_logging_config(&cli);

    // Initialize logging early
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Arbor CLI starting");

    let context = match RunContext::new(&cli) {
        Ok(ctx) => {
            info!("CLI context initialized");
            ctx
        }
        Err(e) => {
            error!("Error initializing session: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match context.run(&cli, stdin.lock(), &mut stdout) {
        Ok(()) => {
            info!("Session complete");
            process::exit(0);
        }
        Err(e) => {
            error!("Session failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args and config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = if let Some(ref config_path) = cli.config {
        ConfigLoader::load_from_file(config_path)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    } else {
        ConfigLoader::load(std::path::Path::new("."))
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    };

    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }

    config
}
