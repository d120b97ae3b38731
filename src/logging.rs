//! Internal diagnostics
//!
//! loggate reports its own problems (config fallbacks, stdout failures,
//! reconfiguration) through `tracing`, on stderr, separate from the lines
//! it emits on behalf of callers.

use crate::constants::{QUIET_TRACE_LEVEL, VERBOSE_TRACE_LEVEL};

/// Initialize tracing for loggate's own diagnostics
///
/// Call early in main() before any logging occurs.
/// Set `verbose` to true for debug-level output. `RUST_LOG`, when set, wins.
pub fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let level = if verbose {
        VERBOSE_TRACE_LEVEL
    } else {
        QUIET_TRACE_LEVEL
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_file(false)
                .compact(),
        )
        .with(filter)
        .try_init();
}
