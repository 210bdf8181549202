//! Log path resolution and directory creation.
//!
//! The native backend requires its target directory to pre-exist, and it
//! receives a plain string rather than a platform path type. This module is
//! the single place host-path quirks (drive letters, tilde prefixes, slash
//! direction) are normalized before the path crosses the backend boundary.

use crate::internal;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolves the configured log path against the host's base directory.
///
/// A configured path carrying a drive/volume separator (or one that is already
/// rooted after tilde expansion) is used verbatim; anything else is joined
/// onto `base_dir`.
#[must_use]
pub fn resolve(base_dir: &Path, configured: &str) -> PathBuf {
    let expanded = shellexpand::tilde(configured);
    let configured = Path::new(expanded.as_ref());

    if expanded.contains(':') || configured.is_absolute() {
        configured.to_path_buf()
    } else {
        base_dir.join(configured)
    }
}

/// Strips the filename portion of a resolved log path.
///
/// Filename detection is a heuristic: components are kept up to the first one
/// containing a dot. A directory with a dot in its name breaks this, which the
/// single-field `LogPath` config contract forces us to live with.
#[must_use]
pub fn directory_of(path: &Path) -> PathBuf {
    let mut dir = PathBuf::new();
    for component in path.components() {
        if component.as_os_str().to_string_lossy().contains('.') {
            break;
        }
        dir.push(component);
    }
    dir
}

/// Ensures the directory chain containing `path` exists, creating it
/// recursively if absent.
///
/// # Errors
/// Returns [`crate::Error::DirectoryCreate`] when creation fails. The caller
/// disables the logging subsystem for the run; the host keeps going.
pub fn ensure_directory(path: &Path) -> Result<(), crate::Error> {
    let dir = directory_of(path);
    if dir.as_os_str().is_empty() {
        return Ok(());
    }

    if dir.exists() {
        return Ok(());
    }

    internal::debug("PATHS", &format!("Creating log directory {}", dir.display()));
    fs::create_dir_all(&dir).map_err(|source| crate::Error::DirectoryCreate {
        path: dir.clone(),
        source,
    })
}

/// Renders a resolved path in the slash direction the backend expects.
#[must_use]
pub fn backend_path(path: &Path) -> String {
    let text = path.to_string_lossy();
    if cfg!(windows) {
        text.replace('/', "\\")
    } else {
        text.into_owned()
    }
}
