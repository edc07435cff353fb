//! CLI parse: clap types for arbor. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// Arbor CLI - persistent virtual filesystem tree
///
/// With no arguments, enters the interactive command loop. With `--file`,
/// executes each non-blank line of the named file. Any other arguments are
/// joined with spaces and executed as a single command.
#[derive(Debug, Parser)]
#[command(name = "arbor")]
#[command(about = "Persistent virtual filesystem tree driven by a line-oriented command language")]
pub struct Cli {
    /// Execute each non-blank line of this file as a command
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Tree storage file (overrides config; default: storage.json)
    #[arg(long, value_name = "FILE")]
    pub storage: Option<PathBuf>,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// A single command to execute (words are joined with spaces)
    #[arg(trailing_var_arg = true)]
    pub command: Vec<String>,
}
