//! Severity and tag gate
//!
//! `LogGate` owns the one `(min_severity, filter)` pair for a process and
//! answers whether a call should reach the formatter. It is a cheap
//! cloneable handle: clones share the same configuration, so the facade and
//! any setup code can hold it without a hidden global.

use crate::filter::Filter;
use crate::severity::Severity;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

/// Immutable configuration snapshot
///
/// Replaced as a whole on every `configure`, never mutated in place, so a
/// reader holding one always sees a matching severity and filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GateConfig {
    pub min_severity: Severity,
    pub filter: Filter,
}

impl GateConfig {
    pub fn new(min_severity: Severity, filter: Filter) -> Self {
        Self {
            min_severity,
            filter,
        }
    }

    /// Severity threshold first, then the filter
    pub fn should_emit(&self, severity: Severity, tags: Option<&[&str]>) -> bool {
        if severity < self.min_severity {
            return false;
        }
        self.filter.admits(tags)
    }
}

/// Shared handle to the active gate configuration
#[derive(Debug, Clone, Default)]
pub struct LogGate {
    // The lock only guards the pointer swap; evaluation runs on the Arc after release.
    current: Arc<RwLock<Arc<GateConfig>>>,
}

impl LogGate {
    /// Gate with the default configuration (`debug`, allow all)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GateConfig) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(config))),
        }
    }

    /// Replace the whole configuration
    pub fn configure(&self, min_severity: Severity, filter: Filter) {
        let _previous = self.replace(GateConfig::new(min_severity, filter));
    }

    /// Replace the whole configuration with a prepared snapshot, returning
    /// the one it displaced
    ///
    /// The write lock covers only the pointer swap; the new snapshot is built
    /// before and the old one released after.
    pub fn replace(&self, config: GateConfig) -> Arc<GateConfig> {
        debug!(
            min_severity = %config.min_severity,
            filter = %config.filter.mode(),
            "gate reconfigured"
        );
        let next = Arc::new(config);
        std::mem::replace(&mut *self.current.write(), next)
    }

    /// Current configuration snapshot
    pub fn snapshot(&self) -> Arc<GateConfig> {
        Arc::clone(&*self.current.read())
    }

    /// Decide whether a call should be formatted and written
    pub fn should_emit(&self, severity: Severity, tags: Option<&[&str]>) -> bool {
        self.snapshot().should_emit(severity, tags)
    }
}
