//! Command-line interface definition using clap
//!
//! Provides structured argument parsing with automatic help generation.

use clap::{Parser, Subcommand};
use loggate::{Filter, GateConfig, Severity};
use std::path::PathBuf;

// =============================================================================
// CLI Definition
// =============================================================================

/// Severity and tag gated logging from the shell
#[derive(Parser, Debug)]
#[command(name = "loggate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Config file (default: $LOGGATE_CONFIG or ./loggate.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Minimum severity to emit (overrides config)
    #[arg(long, value_name = "LEVEL")]
    pub min_severity: Option<Severity>,

    /// Only emit tagged calls carrying one of these tags (overrides config)
    #[arg(long, value_name = "TAG", value_delimiter = ',', conflicts_with = "mute")]
    pub tags: Option<Vec<String>>,

    /// Suppress all output (overrides config)
    #[arg(long)]
    pub mute: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a message if the gate admits it
    Emit {
        /// Severity of the message
        severity: Severity,

        /// Message text
        message: String,

        /// Tag attached to the call (repeatable)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Source file reported in the line
        #[arg(long, value_name = "FILE", default_value = "shell")]
        file: String,

        /// Function reported in the line
        #[arg(long, value_name = "NAME", default_value = "loggate")]
        function: String,

        /// Line number reported in the line
        #[arg(long, value_name = "N", default_value_t = 0)]
        line: u32,
    },

    /// Report whether a call would be emitted (exit status 1 if suppressed)
    Check {
        /// Severity of the call
        severity: Severity,

        /// Tag attached to the call (repeatable)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },

    /// Print the effective configuration as TOML
    ShowConfig,
}

impl Cli {
    /// Apply command-line overrides on top of the file configuration
    pub fn apply_overrides(&self, mut config: GateConfig) -> GateConfig {
        if let Some(min_severity) = self.min_severity {
            config.min_severity = min_severity;
        }
        if self.mute {
            config.filter = Filter::AllowNone;
        } else if let Some(tags) = &self.tags {
            config.filter = Filter::tags(tags.iter().cloned());
        }
        config
    }
}

/// No `--tag` means an untagged call
pub fn call_tags(tags: &[String]) -> Option<Vec<&str>> {
    if tags.is_empty() {
        None
    } else {
        Some(tags.iter().map(String::as_str).collect())
    }
}

// =============================================================================
// Tests
// =============================================================================
