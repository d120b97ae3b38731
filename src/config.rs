//! Configuration management
//!
//! Gate settings can be kept in a TOML file:
//!
//! ```toml
//! [gate]
//! min_severity = "info"
//! filter = "tags"
//! tags = ["network", "ui"]
//! ```
//!
//! Every field is optional; an empty file yields `debug` / `all`.

use crate::constants::{CONFIG_PATH_ENV, DEFAULT_CONFIG_FILE};
use crate::error::{GateError, Result};
use crate::filter::{Filter, FilterMode};
use crate::gate::GateConfig;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

// =============================================================================
// File Format
// =============================================================================

/// Top-level config file
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gate: GateSection,
}

/// `[gate]` section
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GateSection {
    /// Least severe level still emitted
    pub min_severity: Severity,
    /// "all", "none" or "tags"
    pub filter: FilterMode,
    /// Accepted tags, only read when filter = "tags"
    pub tags: Vec<String>,
}

impl GateSection {
    /// Build the gate snapshot this section describes
    pub fn to_gate_config(&self) -> GateConfig {
        if self.filter != FilterMode::Tags && !self.tags.is_empty() {
            warn!(
                "gate.tags is ignored with filter = \"{}\" ({} tags listed)",
                self.filter,
                self.tags.len()
            );
        }
        GateConfig::new(
            self.min_severity,
            Filter::from_mode(self.filter, self.tags.iter().cloned()),
        )
    }

    /// Describe an existing gate snapshot (tags sorted for stable output)
    pub fn from_gate_config(config: &GateConfig) -> Self {
        let mut tags: Vec<String> = match &config.filter {
            Filter::AllowTags(valid) => valid.iter().cloned().collect(),
            _ => Vec::new(),
        };
        tags.sort();
        Self {
            min_severity: config.min_severity,
            filter: config.filter.mode(),
            tags,
        }
    }
}

impl Config {
    pub fn gate_config(&self) -> GateConfig {
        self.gate.to_gate_config()
    }

    pub fn from_gate_config(config: &GateConfig) -> Self {
        Self {
            gate: GateSection::from_gate_config(config),
        }
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|source| GateError::ConfigSerialize { source })
    }
}

// =============================================================================
// Loading / Saving
// =============================================================================

/// Config file location: `$LOGGATE_CONFIG` if set, else `loggate.toml`
/// in the working directory
pub fn default_path() -> PathBuf {
    std::env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Parse config text; `path` is only used for error reporting
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    toml::from_str(content).map_err(|source| GateError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load config from `path`
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|source| GateError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse(&content, path)?;
    debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from `path`, falling back to defaults when it is missing or invalid
pub fn load_or_default(path: &Path) -> Config {
    if !path.exists() {
        debug!("no config at {}, using defaults", path.display());
        return Config::default();
    }

    match load(path) {
        Ok(config) => config,
        Err(e) => {
            warn!("{}, using defaults", e);
            Config::default()
        }
    }
}

/// Save config to `path`
pub fn save(path: &Path, config: &Config) -> Result<()> {
    let content = config.to_toml()?;
    fs::write(path, content).map_err(|source| GateError::ConfigWrite {
        path: path.to_path_buf(),
        source,
    })
}

// ============================================================================
// Tests
// ============================================================================
