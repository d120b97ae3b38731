//! Logging facade
//!
//! Ties a [`LogGate`] to the output [`Sink`]. Each call consults the gate
//! first; the message is only rendered once the call is admitted.

use crate::callsite::CallSite;
use crate::format::format_line;
use crate::gate::LogGate;
use crate::severity::Severity;
use crate::sink::{Sink, StdoutSink};
use std::fmt::{self, Display};
use std::sync::Arc;

/// Gate plus sink, shared by every call site of an application
///
/// ```ignore
/// let logger = Logger::new(LogGate::new());
/// logger.gate().configure(Severity::Info, Filter::tags(["net"]));
///
/// log_info!(logger, tags: ["net"], "connected to {}", addr);
/// log_debug!(logger, "not shown below info");
/// ```
#[derive(Clone)]
pub struct Logger {
    gate: LogGate,
    sink: Arc<dyn Sink>,
}

impl Logger {
    /// Logger writing to standard output
    pub fn new(gate: LogGate) -> Self {
        Self::with_sink(gate, Arc::new(StdoutSink))
    }

    pub fn with_sink(gate: LogGate, sink: Arc<dyn Sink>) -> Self {
        Self { gate, sink }
    }

    /// Handle to the gate; reconfigure through it
    pub fn gate(&self) -> &LogGate {
        &self.gate
    }

    /// Emit `message` if the gate admits it. Returns whether a line was written.
    pub fn log(
        &self,
        severity: Severity,
        message: impl Display,
        tags: Option<&[&str]>,
        site: CallSite<'_>,
    ) -> bool {
        if !self.gate.should_emit(severity, tags) {
            return false;
        }
        self.sink.write_line(&format_line(severity, &site, message));
        true
    }

    pub fn verbose(
        &self,
        message: impl Display,
        tags: Option<&[&str]>,
        site: CallSite<'_>,
    ) -> bool {
        self.log(Severity::Verbose, message, tags, site)
    }

    pub fn debug(
        &self,
        message: impl Display,
        tags: Option<&[&str]>,
        site: CallSite<'_>,
    ) -> bool {
        self.log(Severity::Debug, message, tags, site)
    }

    pub fn info(
        &self,
        message: impl Display,
        tags: Option<&[&str]>,
        site: CallSite<'_>,
    ) -> bool {
        self.log(Severity::Info, message, tags, site)
    }

    pub fn warning(
        &self,
        message: impl Display,
        tags: Option<&[&str]>,
        site: CallSite<'_>,
    ) -> bool {
        self.log(Severity::Warning, message, tags, site)
    }

    pub fn error(
        &self,
        message: impl Display,
        tags: Option<&[&str]>,
        site: CallSite<'_>,
    ) -> bool {
        self.log(Severity::Error, message, tags, site)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("gate", &self.gate)
            .finish_non_exhaustive()
    }
}
