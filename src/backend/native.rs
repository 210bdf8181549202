//! Dynamic symbol resolution for the native backend library.
//!
//! The only unsafe code outside the FFI surface lives here: loading the
//! library and calling its two entry points through raw function pointers.

#![allow(unsafe_code)]

use super::{Backend, BindError};
use crate::internal;
use libloading::Library;
use std::ffi::{CString, c_char, c_int};
use std::path::Path;

/// `InitLogSystem(maxSeverity, fileName, maxFileSize, maxFileCount) -> bool`
type InitFn = unsafe extern "C" fn(*const c_char, *const c_char, usize, c_int) -> bool;

/// `ExportLogLevel(severity, func, line, text)` — `text` is a nul-terminated
/// UTF-16 wide string, matching the host's native string type.
type EmitFn = unsafe extern "C" fn(c_int, *const c_char, usize, *const u16);

const INIT_SYMBOL: &[u8] = b"InitLogSystem\0";
const EMIT_SYMBOL: &[u8] = b"ExportLogLevel\0";

/// Backend adapter holding the loaded library and its two resolved entry points.
///
/// The library handle is released exactly once, when the last owner drops the
/// backend; the field order keeps the function pointers from outliving the
/// mapping they point into.
#[derive(Debug)]
pub struct NativeBackend {
    init_fn: InitFn,
    emit_fn: EmitFn,
    _library: Library,
}

/// Loads the backend library and resolves both entry points.
///
/// Partial resolution is total failure: if either symbol is missing the
/// backend is unusable, but resolution of the other symbol still runs so every
/// missing symbol gets its own [`BindError`] in the returned list.
///
/// # Errors
/// One `LibraryNotFound`, or one error per unresolved symbol.
pub fn bind(library_path: &Path) -> Result<NativeBackend, Vec<BindError>> {
    internal::debug(
        "BIND",
        &format!("Loading backend library {}", library_path.display()),
    );

    // SAFETY: the library's initialization routines are trusted not to have
    // load-time side effects beyond registering its exports.
    let library = match unsafe { Library::new(library_path) } {
        Ok(library) => library,
        Err(source) => {
            return Err(vec![BindError::LibraryNotFound {
                path: library_path.to_path_buf(),
                source,
            }]);
        }
    };

    let mut errors = Vec::new();

    // SAFETY: the symbol type matches the backend library's exported signature.
    let init_fn = match unsafe { library.get::<InitFn>(INIT_SYMBOL) } {
        Ok(symbol) => Some(*symbol),
        Err(e) => {
            errors.push(BindError::MissingInit(e));
            None
        }
    };

    // SAFETY: the symbol type matches the backend library's exported signature.
    let emit_fn = match unsafe { library.get::<EmitFn>(EMIT_SYMBOL) } {
        Ok(symbol) => Some(*symbol),
        Err(e) => {
            errors.push(BindError::MissingEmit(e));
            None
        }
    };

    match (init_fn, emit_fn) {
        (Some(init_fn), Some(emit_fn)) => {
            internal::info("BIND", "Backend library bound");
            Ok(NativeBackend {
                init_fn,
                emit_fn,
                _library: library,
            })
        }
        _ => Err(errors),
    }
}

/// Interior nul bytes cannot cross the C boundary; such strings degrade to
/// empty rather than panicking inside a logging call.
fn to_c_string(text: &str) -> CString {
    CString::new(text).unwrap_or_default()
}

impl Backend for NativeBackend {
    fn init(
        &self,
        max_severity: &str,
        file_name: &str,
        max_file_size: usize,
        max_file_count: u32,
    ) -> bool {
        let severity = to_c_string(max_severity);
        let file_name = to_c_string(file_name);
        let max_file_count = c_int::try_from(max_file_count).unwrap_or(c_int::MAX);

        // SAFETY: both strings are nul-terminated and outlive the call.
        unsafe { (self.init_fn)(severity.as_ptr(), file_name.as_ptr(), max_file_size, max_file_count) }
    }

    fn emit(&self, severity: i32, func: &str, line: usize, text: &str) {
        let func = to_c_string(func);
        let wide: Vec<u16> = text.encode_utf16().chain(std::iter::once(0)).collect();

        // SAFETY: func is nul-terminated, wide is nul-terminated UTF-16, and
        // both outlive the call. Emit itself is thread-safe by contract.
        unsafe { (self.emit_fn)(severity, func.as_ptr(), line, wide.as_ptr()) }
    }
}
