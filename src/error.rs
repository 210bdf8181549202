//! Unified error type for all logcollector operations.
//!
//! Every variant here is recoverable from the host's point of view: failures
//! disable the logging subsystem (or fall back to defaults) but never
//! terminate the process.

use std::path::PathBuf;

/// Error type for logcollector operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// Config file could not be read.
    ConfigRead { path: PathBuf, source: std::io::Error },
    /// JSON config parsing error (malformed document or missing field).
    ConfigParse(serde_json::Error),
    /// Log directory could not be created.
    DirectoryCreate { path: PathBuf, source: std::io::Error },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigRead { path, source } => {
                write!(f, "failed to read config {}: {source}", path.display())
            }
            Self::ConfigParse(e) => write!(f, "config parse error: {e}"),
            Self::DirectoryCreate { path, source } => {
                write!(f, "failed to create log directory {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigRead { source, .. } | Self::DirectoryCreate { source, .. } => Some(source),
            Self::ConfigParse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::ConfigParse(e)
    }
}
