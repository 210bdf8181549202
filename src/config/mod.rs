//! JSON configuration loading from the host's content root.
//!
//! Separated from struct definitions so the loading logic (file I/O, failure
//! policy) stays independent of the serde schema.

mod structs;

pub use structs::{ConfigFile, LogConfig};

use crate::internal;
use crate::level::Severity;
use std::fs;
use std::path::{Path, PathBuf};

/// Location of the config file relative to the host's content root.
const CONFIG_RELATIVE_PATH: &str = "Config/config.json";

impl LogConfig {
    /// Fixed, well-known config location — `<content_root>/Config/config.json`.
    #[must_use]
    pub fn config_path(content_root: &Path) -> PathBuf {
        content_root.join(CONFIG_RELATIVE_PATH)
    }

    /// Loads configuration from an explicit path.
    ///
    /// All-or-nothing: a missing file, unreadable file, malformed document, or
    /// missing field is an error and no field of the result is populated. The
    /// router converts the error into a startup diagnostic and continues with
    /// defaults, so a broken config can never take the host down.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or the `Logging` section fails
    /// to deserialize.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        internal::debug("CONFIG", &format!("Loading config from {}", path.display()));

        let content = fs::read_to_string(path).map_err(|source| crate::Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let file: ConfigFile = serde_json::from_str(&content)?;
        internal::info("CONFIG", "Config loaded");
        Ok(file.logging)
    }

    /// Config stores severity as a string for JSON ergonomics — this converts
    /// to the typed enum, falling back to the default maximum on unknown names.
    #[must_use]
    pub fn parse_severity(&self) -> Severity {
        self.severity.parse().unwrap_or(Severity::Debug)
    }
}
