//! loggate - severity and tag gated logging facade
//!
//! A [`LogGate`] holds one `(min_severity, filter)` pair and decides for every
//! call whether it reaches the output:
//! - calls below `min_severity` are dropped first, whatever their tags
//! - [`Filter::AllowNone`] drops everything, [`Filter::AllowAll`] keeps everything
//! - [`Filter::AllowTags`] keeps tagged calls sharing at least one tag with the
//!   set, and always keeps untagged calls
//!
//! [`Logger`] pairs the gate with a [`Sink`] and renders admitted calls as
//! `{icon} {file}.{function}[{line}]: {message}`. The `log_*!` macros fill in
//! the call site.

pub mod callsite;
pub mod config;
pub mod constants;
pub mod error;
pub mod filter;
pub mod format;
pub mod gate;
pub mod logger;
pub mod logging;
pub mod sink;
pub mod severity;

mod macros;

pub use callsite::CallSite;
pub use error::{GateError, Result};
pub use filter::{Filter, FilterMode, TagSet};
pub use gate::{GateConfig, LogGate};
pub use logger::Logger;
pub use severity::Severity;
pub use sink::{MemorySink, Sink, StdoutSink};
