//! Startup sequence: config load, backend bind, path resolution, backend init.
//!
//! Runs once, synchronously, before any log call is accepted. Every failure
//! is converted into a diagnostic on the [`StartupReport`]; none of them
//! propagate as process-terminating faults, and none of them are retried.

use super::report::StartupReport;
use super::LogRouter;
use crate::backend::{self, Backend};
use crate::config::LogConfig;
use crate::internal;
use crate::level::Severity;
use crate::output::{Sink, StderrSink};
use crate::paths;
use std::path::PathBuf;
use std::sync::Arc;

/// Assembles a [`LogRouter`] from host-supplied locations.
pub struct RouterBuilder {
    content_root: PathBuf,
    base_dir: PathBuf,
    plugin_dir: Option<PathBuf>,
    library_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    sink: Option<Box<dyn Sink>>,
    fallback_enabled: bool,
    backend: Option<Arc<dyn Backend>>,
}

impl Default for RouterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RouterBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            content_root: PathBuf::from("."),
            base_dir: PathBuf::from("."),
            plugin_dir: None,
            library_path: None,
            config_path: None,
            sink: None,
            // Mirrors the host's shipping-build gate: fallback lines exist for
            // developers, production builds drop deactivated records instead.
            fallback_enabled: cfg!(debug_assertions),
            backend: None,
        }
    }

    /// Host content root; the config file lives at a fixed location under it.
    #[must_use]
    pub fn content_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.content_root = path.into();
        self
    }

    /// Base directory relative log paths resolve against.
    #[must_use]
    pub fn base_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.base_dir = path.into();
        self
    }

    /// Plugin binary directory the backend library is searched under.
    #[must_use]
    pub fn plugin_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.plugin_dir = Some(path.into());
        self
    }

    /// Exact backend library path, overriding the platform-specific default.
    #[must_use]
    pub fn library_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.library_path = Some(path.into());
        self
    }

    /// Exact config file path, overriding the content-root default.
    #[must_use]
    pub fn config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Host-provided channel for fallback lines; stderr when unset.
    #[must_use]
    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Overrides the build-mode gate on fallback output.
    #[must_use]
    pub const fn fallback_enabled(mut self, enabled: bool) -> Self {
        self.fallback_enabled = enabled;
        self
    }

    /// Injects a backend instead of binding the dynamic library — the seam
    /// tests use to observe dispatch without a real library on disk.
    #[must_use]
    pub fn backend(mut self, backend: impl Backend + 'static) -> Self {
        self.backend = Some(Arc::new(backend));
        self
    }

    /// Runs the startup sequence and produces the router plus its report.
    ///
    /// A failed config load downgrades to defaults (recoverable); a failed
    /// bind, directory creation, or backend init leaves the router disabled
    /// for the process lifetime.
    #[must_use]
    pub fn build(self) -> (LogRouter, StartupReport) {
        let mut report = StartupReport::default();

        let config_path = self
            .config_path
            .unwrap_or_else(|| LogConfig::config_path(&self.content_root));
        let config = match LogConfig::load_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                report.push(
                    Severity::Warning,
                    format!("Failed to load logging config, using defaults: {e}"),
                );
                LogConfig::default()
            }
        };

        let backend = match self.backend {
            Some(backend) => Some(backend),
            None => {
                let plugin_dir = self.plugin_dir.as_deref().unwrap_or(&self.base_dir);
                let library_path = self
                    .library_path
                    .unwrap_or_else(|| backend::default_library_path(plugin_dir));
                match backend::bind(&library_path) {
                    Ok(native) => Some(Arc::new(native) as Arc<dyn Backend>),
                    Err(errors) => {
                        for e in errors {
                            report.push(Severity::Error, e.to_string());
                        }
                        None
                    }
                }
            }
        };

        let backend = backend.and_then(|backend| {
            let log_path = paths::resolve(&self.base_dir, &config.log_path);
            if let Err(e) = paths::ensure_directory(&log_path) {
                report.push(
                    Severity::Error,
                    format!("Log directory initialization failed, logs cannot output: {e}"),
                );
                return None;
            }

            let file_name = paths::backend_path(&log_path);
            internal::debug("ROUTER", &format!("Initializing backend, log file {file_name}"));
            let file_size = usize::try_from(config.file_size).unwrap_or(usize::MAX);
            if backend.init(&config.severity, &file_name, file_size, config.file_num) {
                Some(backend)
            } else {
                report.push(
                    Severity::Error,
                    "Backend rejected initialization parameters, logging disabled",
                );
                None
            }
        });

        report.set_enabled(backend.is_some());

        let sink = self.sink.unwrap_or_else(|| Box::new(StderrSink));
        let router = LogRouter::new(backend, config.activation, self.fallback_enabled, sink);
        (router, report)
    }
}
