//! Severity values carried by every log record.
//!
//! The ordinals are part of the wire contract with the native backend
//! (`ExportLogLevel` takes the raw integer), so the discriminants are fixed.

use std::fmt;
use std::str::FromStr;

/// Fixed six-level severity scale plus `None`, matching the backend's ordinals 0-6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    /// Records with no meaningful severity; rendered with the `NONE` label and
    /// routed like any other record rather than suppressed.
    #[default]
    None = 0,
    /// Unrecoverable host failures.
    Fatal = 1,
    /// Errors the host survives but an operator should see.
    Error = 2,
    /// Non-fatal anomalies that may need attention.
    Warning = 3,
    /// Normal operational milestones.
    Info = 4,
    /// Development-time diagnostics.
    Debug = 5,
    /// High-volume instrumentation.
    Verbose = 6,
}

impl Severity {
    /// Lowercase because the config file stores the maximum severity as a lowercase string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Fatal => "fatal",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Verbose => "verbose",
        }
    }

    /// Fixed uppercase label used by the fallback formatter.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Fatal => "FATAL",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Verbose => "VERBOSE",
        }
    }

    /// Total mapping from the raw integers call sites pass in — unknown
    /// ordinals fold into `None` instead of failing.
    #[must_use]
    pub const fn from_ordinal(ordinal: i32) -> Self {
        match ordinal {
            1 => Self::Fatal,
            2 => Self::Error,
            3 => Self::Warning,
            4 => Self::Info,
            5 => Self::Debug,
            6 => Self::Verbose,
            _ => Self::None,
        }
    }

    /// Convenience for iteration — used by diagnostics and tests.
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::None,
            Self::Fatal,
            Self::Error,
            Self::Warning,
            Self::Info,
            Self::Debug,
            Self::Verbose,
        ]
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown severity" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError(String);

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown severity: '{}'", self.0)
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "fatal" => Ok(Self::Fatal),
            "error" | "err" => Ok(Self::Error),
            "warning" | "warn" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "verbose" | "trace" => Ok(Self::Verbose),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}
