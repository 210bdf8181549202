//! The routing core: owns the backend handle and the activation flag, and
//! decides on every incoming record whether to forward it to the backend or
//! render it for the fallback sink.

mod builder;
mod report;

pub use builder::RouterBuilder;
pub use report::{Diagnostic, StartupReport};

use crate::backend::Backend;
use crate::fmt;
use crate::internal;
use crate::level::Severity;
use crate::output::Sink;
use std::sync::{Arc, RwLock};

/// Routing decisions read two booleans fixed at startup plus the backend slot;
/// the slot is the only mutable state and only `shutdown` ever writes it.
pub struct LogRouter {
    /// `None` means disabled — bind or directory setup failed, or the router
    /// was shut down. The lock is the dispose barrier: `record` clones the
    /// `Arc` under a read lock and dispatches outside it, so `shutdown` can
    /// never release the library out from under an in-flight call.
    backend: RwLock<Option<Arc<dyn Backend>>>,
    activation: bool,
    fallback_enabled: bool,
    sink: Box<dyn Sink>,
}

impl LogRouter {
    /// Startup involves config, filesystem, and symbol resolution steps — the
    /// builder walks through them and reports every failure.
    #[must_use]
    pub fn builder() -> RouterBuilder {
        RouterBuilder::new()
    }

    pub(crate) fn new(
        backend: Option<Arc<dyn Backend>>,
        activation: bool,
        fallback_enabled: bool,
        sink: Box<dyn Sink>,
    ) -> Self {
        Self {
            backend: RwLock::new(backend),
            activation,
            fallback_enabled,
            sink,
        }
    }

    /// Routes one record. Called from arbitrary host threads; never blocks
    /// beyond the brief handle clone and never panics past this boundary.
    ///
    /// Severity arrives as the raw ordinal the host call sites use; values
    /// outside 1-6 render with the `NONE` label rather than failing.
    pub fn record(&self, severity: i32, func: &str, text: &str, line: usize) {
        let Some(backend) = self.backend_handle() else {
            // Disabled routers drop records silently; the single startup
            // diagnostic already told the operator why.
            return;
        };

        if self.activation {
            backend.emit(severity, func, line, text);
        } else if self.fallback_enabled {
            self.sink.write_line(&fmt::render(severity, func, line, text));
        }
    }

    /// Idempotent release of the backend handle. Safe to call repeatedly or on
    /// a router that never bound; the library itself is unloaded when the last
    /// in-flight dispatch finishes.
    pub fn shutdown(&self) {
        let Ok(mut slot) = self.backend.write() else {
            return;
        };
        if slot.take().is_some() {
            internal::debug("ROUTER", "Backend handle released");
        }
    }

    /// Whether records currently have somewhere to go besides the drop path.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.backend_handle().is_some()
    }

    fn backend_handle(&self) -> Option<Arc<dyn Backend>> {
        // A poisoned lock means a writer panicked mid-shutdown; treat the
        // router as disabled rather than propagating the panic.
        self.backend.read().ok().and_then(|slot| slot.clone())
    }

    /// Unrecoverable host failures.
    pub fn fatal(&self, func: &str, text: &str, line: usize) {
        self.record(Severity::Fatal as i32, func, text, line);
    }

    /// Errors the host survives but an operator should see.
    pub fn error(&self, func: &str, text: &str, line: usize) {
        self.record(Severity::Error as i32, func, text, line);
    }

    /// Non-fatal anomalies that may need attention.
    pub fn warning(&self, func: &str, text: &str, line: usize) {
        self.record(Severity::Warning as i32, func, text, line);
    }

    /// Normal operational milestones.
    pub fn info(&self, func: &str, text: &str, line: usize) {
        self.record(Severity::Info as i32, func, text, line);
    }

    /// Development-time diagnostics.
    pub fn debug(&self, func: &str, text: &str, line: usize) {
        self.record(Severity::Debug as i32, func, text, line);
    }

    /// High-volume instrumentation.
    pub fn verbose(&self, func: &str, text: &str, line: usize) {
        self.record(Severity::Verbose as i32, func, text, line);
    }
}

impl Drop for LogRouter {
    fn drop(&mut self) {
        self.shutdown();
    }
}
