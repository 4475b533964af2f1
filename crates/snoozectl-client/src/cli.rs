//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// snoozectl - Resolve notification snooze options
#[derive(Debug, Parser)]
#[command(name = "snoozectl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "SNOOZECTL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the resolved snooze options (default)
    Show {
        /// Override string, e.g. "default=30,options_array=10:30:60"
        #[arg(long = "override", env = "NOTIFICATION_SNOOZE_OPTIONS")]
        override_value: Option<String>,
    },

    /// Report every problem in an override string
    Check {
        /// Override string to check
        value: String,
    },

    /// Re-resolve whenever an override file changes
    Watch {
        /// File holding the override string
        file: PathBuf,

        /// Seconds between reads of the file
        #[arg(long, default_value = "2")]
        interval: u64,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration
    Dump,

    /// Validate configuration
    Validate,

    /// Show configuration file path
    Path,
}
