//! Centralized error types
//!
//! The decision core never fails; these errors come from the config file
//! and the command-line surface only.
//! Use `Result<T>` as shorthand for `std::result::Result<T, GateError>`.

use std::fmt;
use std::path::PathBuf;

/// All loggate errors
#[derive(Debug)]
pub enum GateError {
    // === Config file ===
    /// Failed to read the config file
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to write the config file
    ConfigWrite {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Config file is not valid TOML or has wrong field types
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// Config could not be rendered as TOML
    ConfigSerialize { source: toml::ser::Error },

    // === Output ===
    /// Failed to write command output
    Output { source: std::io::Error },

    // === Parsing ===
    /// Severity name not recognised
    UnknownSeverity { value: String },
    /// Filter mode name not recognised
    UnknownFilter { value: String },
}

impl std::error::Error for GateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ConfigRead { source, .. } | Self::ConfigWrite { source, .. } => Some(source),
            Self::ConfigParse { source, .. } => Some(source),
            Self::ConfigSerialize { source } => Some(source),
            Self::Output { source } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for GateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigRead { path, .. } => {
                write!(f, "Cannot read config file: {}", path.display())
            }
            Self::ConfigWrite { path, .. } => {
                write!(f, "Cannot write config file: {}", path.display())
            }
            Self::ConfigParse { path, source } => {
                write!(f, "Invalid config {}: {}", path.display(), source)
            }
            Self::ConfigSerialize { source } => write!(f, "Cannot serialize config: {}", source),
            Self::Output { source } => write!(f, "Cannot write output: {}", source),
            Self::UnknownSeverity { value } => write!(
                f,
                "Unknown severity '{}' (expected verbose, debug, info, warning or error)",
                value
            ),
            Self::UnknownFilter { value } => write!(
                f,
                "Unknown filter '{}' (expected all, none or tags)",
                value
            ),
        }
    }
}

/// Alias for Result with GateError
pub type Result<T> = std::result::Result<T, GateError>;
