//! Startup outcome reporting.
//!
//! The core never presents errors itself — it produces one diagnostic per
//! distinct failure reason and hands the list to the host, which owns the
//! user-facing notification mechanism.

use crate::level::Severity;
use std::fmt;

/// One startup failure: a severity classification plus a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    severity: Severity,
    message: String,
}

impl Diagnostic {
    pub(crate) fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    /// How serious the failure is — `Warning` for recoverable config problems,
    /// `Error` for anything that disables the subsystem.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Human-readable description for the host's notification mechanism.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity.label(), self.message)
    }
}

/// Everything the host needs to know about how startup went.
#[derive(Debug, Default)]
pub struct StartupReport {
    diagnostics: Vec<Diagnostic>,
    enabled: bool,
}

impl StartupReport {
    pub(crate) fn push(&mut self, severity: Severity, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::new(severity, message));
    }

    pub(crate) const fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// One entry per distinct failure reason, surfaced once — the router never
    /// repeats warnings per dropped record at runtime.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Whether the router came up with a usable backend.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }
}
