//! The external logging backend behind a two-method seam.
//!
//! The router never checks "is a backend present" — it holds some `Backend`
//! implementation and calls through it. The real adapter resolves the two
//! entry points from a dynamic library; [`NullBackend`] stands in wherever a
//! do-nothing implementation is useful.

mod native;

pub use native::{NativeBackend, bind};

use std::fmt;
use std::path::{Path, PathBuf};

/// The backend library's two exported entry points, as a Rust trait.
///
/// `emit` must be safe under concurrent invocation — a contract imposed on
/// implementors, since the router forwards records from arbitrary host threads
/// without queueing.
pub trait Backend: Send + Sync {
    /// Forwards rotation and filtering parameters to the backend's
    /// `InitLogSystem`. Returns `false` when the backend rejects them.
    fn init(
        &self,
        max_severity: &str,
        file_name: &str,
        max_file_size: usize,
        max_file_count: u32,
    ) -> bool;

    /// Forwards one record verbatim to the backend's `ExportLogLevel`.
    fn emit(&self, severity: i32, func: &str, line: usize, text: &str);
}

/// Do-nothing backend, accepting every record and discarding it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBackend;

impl Backend for NullBackend {
    fn init(
        &self,
        _max_severity: &str,
        _file_name: &str,
        _max_file_size: usize,
        _max_file_count: u32,
    ) -> bool {
        true
    }

    fn emit(&self, _severity: i32, _func: &str, _line: usize, _text: &str) {}
}

/// Binding failures, each reported independently so operators can see exactly
/// which part of the library is missing.
///
/// All of these are fatal to the logging subsystem only — the router stays
/// disabled for the process lifetime, the host keeps running.
#[derive(Debug)]
pub enum BindError {
    /// Dynamic library failed to load.
    LibraryNotFound {
        path: PathBuf,
        source: libloading::Error,
    },
    /// Library loaded but does not export `InitLogSystem`.
    MissingInit(libloading::Error),
    /// Library loaded but does not export `ExportLogLevel`.
    MissingEmit(libloading::Error),
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LibraryNotFound { path, source } => {
                write!(f, "failed to load backend library {}: {source}", path.display())
            }
            Self::MissingInit(e) => {
                write!(f, "backend library does not export InitLogSystem: {e}")
            }
            Self::MissingEmit(e) => {
                write!(f, "backend library does not export ExportLogLevel: {e}")
            }
        }
    }
}

impl std::error::Error for BindError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::LibraryNotFound { source, .. } => Some(source),
            Self::MissingInit(e) | Self::MissingEmit(e) => Some(e),
        }
    }
}

/// Platform-specific library location under the host's plugin binary directory.
#[must_use]
pub fn default_library_path(plugin_dir: &Path) -> PathBuf {
    let relative = if cfg!(target_os = "windows") {
        "Binaries/ThirdParty/LogCollectorLibrary/Win64/LogSystemDLL.dll"
    } else if cfg!(target_os = "macos") {
        "Binaries/ThirdParty/LogCollectorLibrary/Mac/libLogSystem.dylib"
    } else {
        "Binaries/ThirdParty/LogCollectorLibrary/Linux/libLogSystem.so"
    };
    plugin_dir.join(relative)
}
