//! Crate-wide constants

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "loggate.toml";

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "LOGGATE_CONFIG";

/// Tracing filter for internal diagnostics in verbose mode
pub const VERBOSE_TRACE_LEVEL: &str = "debug";

/// Tracing filter for internal diagnostics otherwise
pub const QUIET_TRACE_LEVEL: &str = "warn";
