// Deny rather than forbid: the native backend adapter and the FFI surface
// re-enable unsafe locally for symbol resolution and pointer handling.
#![deny(unsafe_code)]

//! `logcollector` - Log-routing shim for host applications.
//!
//! Accepts structured log records from call sites (severity, originating
//! function, source line, message text) and delivers them either to an external
//! native logging backend or to a local fallback sink, depending on
//! configuration loaded once at startup:
//! - Config loaded from a JSON file under the host's content root
//! - Backend bound from a dynamic library (two entry points: init + emit)
//! - Per-call routing decision with no allocation before dispatch
//! - Fallback formatting through a host-provided sink
//!
//! # Example
//!
//! ```no_run
//! use logcollector::{LogRouter, Severity};
//!
//! let (router, report) = LogRouter::builder()
//!     .content_root("/opt/host/Content")
//!     .base_dir("/opt/host")
//!     .plugin_dir("/opt/host/Plugins/LogCollector")
//!     .build();
//!
//! for diag in report.diagnostics() {
//!     eprintln!("startup: {diag}");
//! }
//!
//! router.info("Startup", "Host module loaded", 0);
//! router.record(Severity::Error as i32, "NetDriver::Tick", "Connection lost", 108);
//! router.shutdown();
//! ```
//!
//! # Features
//!
//! - `ffi`: Enables the C-ABI surface for non-Rust hosts

pub mod backend;
pub mod config;
mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod output;
pub mod paths;
pub mod router;

// FFI module (feature-gated)
#[cfg(feature = "ffi")]
pub mod ffi;

// Re-exports for convenience
pub use backend::{Backend, BindError, NullBackend};
pub use config::LogConfig;
pub use error::Error;
pub use level::Severity;
pub use output::{Sink, StderrSink};
pub use router::{Diagnostic, LogRouter, RouterBuilder, StartupReport};

// FFI re-exports
#[cfg(feature = "ffi")]
pub use ffi::{
    LOGCOLLECTOR_SEVERITY_DEBUG, LOGCOLLECTOR_SEVERITY_ERROR, LOGCOLLECTOR_SEVERITY_FATAL,
    LOGCOLLECTOR_SEVERITY_INFO, LOGCOLLECTOR_SEVERITY_NONE, LOGCOLLECTOR_SEVERITY_VERBOSE,
    LOGCOLLECTOR_SEVERITY_WARNING, LogCollectorContext, logcollector_diagnostic_count,
    logcollector_free, logcollector_get_diagnostic, logcollector_get_last_error,
    logcollector_init, logcollector_record, logcollector_shutdown,
};
