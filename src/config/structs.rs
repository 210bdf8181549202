//! Configuration struct definitions.

use serde::Deserialize;

/// Document wrapper — the host nests the logging section under a fixed
/// top-level `"Logging"` key so other subsystems can share the same file.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    #[serde(rename = "Logging")]
    pub logging: LogConfig,
}

/// Logging configuration, loaded once at startup and immutable thereafter.
///
/// Every field is required on purpose: a load attempt either populates the
/// whole struct or fails and the caller applies [`LogConfig::default`]. There
/// is no partially-populated state.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    /// `true` routes records to the external backend, `false` to the fallback sink.
    #[serde(rename = "Activation")]
    pub activation: bool,
    /// Maximum severity name handed to backend initialization (e.g. "debug").
    #[serde(rename = "Severity")]
    pub severity: String,
    /// Relative or absolute destination path for the backend's log file.
    #[serde(rename = "LogPath")]
    pub log_path: String,
    /// Max size per log file in bytes; interpretation belongs to the backend.
    #[serde(rename = "FileSize")]
    pub file_size: u64,
    /// Max number of rotated files; interpretation belongs to the backend.
    #[serde(rename = "FileNum")]
    pub file_num: u32,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            activation: true,
            severity: "debug".to_string(),
            log_path: "Logs/common/log.txt".to_string(),
            file_size: 1_000_000,
            file_num: 10,
        }
    }
}
