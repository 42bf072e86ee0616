//! CLI parse: clap types for Pippin. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pippin CLI - generate Pippin SVGs with an LLM and serve them
#[derive(Parser, Debug)]
#[command(name = "pippin")]
#[command(about = "Generate animated SVGs of Pippin the unicorn and serve them over HTTP")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging
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

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Generate missing SVGs, then serve the gallery
    Serve {
        /// Listen address (overrides [server].bind)
        #[arg(long)]
        bind: Option<String>,
        /// Serve existing SVGs without running the batch first
        #[arg(long)]
        skip_generation: bool,
    },
    /// Generate missing SVGs and exit
    Generate,
    /// List the prompt catalog with derived filenames and status
    Prompts {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}
