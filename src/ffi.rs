//! C-ABI bindings so non-Rust hosts can initialize the router, feed it records,
//! and surface its startup diagnostics through their own notification UI.

#![allow(unsafe_code)]

use std::ffi::{CStr, CString, c_char, c_int};
use std::path::PathBuf;
use std::ptr;
use std::sync::Mutex;

use crate::internal;
use crate::router::LogRouter;

/// Named constants so FFI callers avoid magic numbers in their log calls.
pub const LOGCOLLECTOR_SEVERITY_NONE: c_int = 0;
pub const LOGCOLLECTOR_SEVERITY_FATAL: c_int = 1;
pub const LOGCOLLECTOR_SEVERITY_ERROR: c_int = 2;
pub const LOGCOLLECTOR_SEVERITY_WARNING: c_int = 3;
pub const LOGCOLLECTOR_SEVERITY_INFO: c_int = 4;
pub const LOGCOLLECTOR_SEVERITY_DEBUG: c_int = 5;
pub const LOGCOLLECTOR_SEVERITY_VERBOSE: c_int = 6;

/// Opaque pointer for C callers — hides the router behind a stable ABI boundary.
pub struct LogCollectorContext {
    router: LogRouter,
    /// Diagnostics pre-converted to C strings so `logcollector_get_diagnostic`
    /// can hand out pointers that stay valid for the context's lifetime.
    diagnostics: Vec<(c_int, CString)>,
    /// Hosts may log from several threads, so the error slot takes a lock.
    last_error: Mutex<Option<CString>>,
}

impl LogCollectorContext {
    fn set_error(&self, err: &str) {
        if let Ok(mut slot) = self.last_error.lock() {
            *slot = CString::new(err).ok();
        }
    }
}

/// Reads an optional C string argument; `None` only on invalid UTF-8.
///
/// # Safety
/// `ptr` must be null or a valid nul-terminated string.
unsafe fn opt_str<'a>(ptr: *const c_char, fallback: &'a str) -> Option<&'a str> {
    if ptr.is_null() {
        return Some(fallback);
    }
    // SAFETY: non-null, caller guarantees nul termination
    unsafe { CStr::from_ptr(ptr) }.to_str().ok()
}

/// Runs the full startup sequence and returns a context owning the router.
///
/// `plugin_dir` may be `NULL` to search for the backend library under
/// `base_dir`. Startup failures do not return `NULL` — the context comes back
/// with a disabled router and the diagnostics explaining why; `NULL` only
/// signals invalid UTF-8 in the arguments.
///
/// # Safety
/// Each argument must be `NULL` or a valid nul-terminated UTF-8 string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn logcollector_init(
    content_root: *const c_char,
    base_dir: *const c_char,
    plugin_dir: *const c_char,
) -> *mut LogCollectorContext {
    // SAFETY: forwarded caller contract
    let (Some(content_root), Some(base_dir), Some(plugin_dir)) = (unsafe {
        (
            opt_str(content_root, "."),
            opt_str(base_dir, "."),
            opt_str(plugin_dir, ""),
        )
    }) else {
        internal::error("FFI", "Invalid UTF-8 in init arguments");
        return ptr::null_mut();
    };

    let mut builder = LogRouter::builder()
        .content_root(content_root)
        .base_dir(base_dir);
    if !plugin_dir.is_empty() {
        builder = builder.plugin_dir(PathBuf::from(plugin_dir));
    }

    let (router, report) = builder.build();
    let diagnostics = report
        .diagnostics()
        .iter()
        .map(|d| {
            (
                d.severity() as c_int,
                CString::new(d.message()).unwrap_or_default(),
            )
        })
        .collect();

    let ctx = Box::new(LogCollectorContext {
        router,
        diagnostics,
        last_error: Mutex::new(None),
    });

    Box::into_raw(ctx)
}

/// The host's log entry point: `LogRecord(severity, func, text, line = 0)`.
///
/// # Safety
/// `ctx` must come from `logcollector_init` and not yet be freed; `func` and
/// `text` must be `NULL` or valid nul-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn logcollector_record(
    ctx: *mut LogCollectorContext,
    severity: c_int,
    func: *const c_char,
    text: *const c_char,
    line: usize,
) {
    if ctx.is_null() {
        return;
    }
    // SAFETY: ctx is non-null and caller guarantees it is a live context
    let ctx = unsafe { &*ctx };

    // SAFETY: forwarded caller contract
    let (Some(func), Some(text)) = (unsafe { (opt_str(func, ""), opt_str(text, "")) }) else {
        ctx.set_error("invalid UTF-8 in log record");
        return;
    };

    ctx.router.record(severity, func, text, line);
}

/// Number of startup diagnostics the host should surface.
///
/// # Safety
/// `ctx` must come from `logcollector_init` and not yet be freed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn logcollector_diagnostic_count(ctx: *const LogCollectorContext) -> c_int {
    if ctx.is_null() {
        return 0;
    }
    // SAFETY: ctx is non-null and caller guarantees it is a live context
    let ctx = unsafe { &*ctx };
    c_int::try_from(ctx.diagnostics.len()).unwrap_or(c_int::MAX)
}

/// Fetches one startup diagnostic: the returned pointer is the message, valid
/// until the context is freed; `severity_out` (when non-null) receives the
/// severity classification. Out-of-range indices return `NULL`.
///
/// # Safety
/// `ctx` must come from `logcollector_init` and not yet be freed;
/// `severity_out` must be `NULL` or writable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn logcollector_get_diagnostic(
    ctx: *const LogCollectorContext,
    index: c_int,
    severity_out: *mut c_int,
) -> *const c_char {
    if ctx.is_null() {
        return ptr::null();
    }
    // SAFETY: ctx is non-null and caller guarantees it is a live context
    let ctx = unsafe { &*ctx };

    let Some((severity, message)) = usize::try_from(index)
        .ok()
        .and_then(|i| ctx.diagnostics.get(i))
    else {
        return ptr::null();
    };

    if !severity_out.is_null() {
        // SAFETY: severity_out is non-null and caller guarantees it is writable
        unsafe { *severity_out = *severity };
    }
    message.as_ptr()
}

/// Idempotent backend release; the context stays valid (and droppable) after.
///
/// # Safety
/// `ctx` must come from `logcollector_init` and not yet be freed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn logcollector_shutdown(ctx: *mut LogCollectorContext) {
    if ctx.is_null() {
        return;
    }
    // SAFETY: ctx is non-null and caller guarantees it is a live context
    let ctx = unsafe { &*ctx };
    ctx.router.shutdown();
}

/// Last error message, or `NULL` when no error has occurred. Valid until the
/// next failing call on the same context or until the context is freed.
///
/// # Safety
/// `ctx` must come from `logcollector_init` and not yet be freed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn logcollector_get_last_error(
    ctx: *const LogCollectorContext,
) -> *const c_char {
    if ctx.is_null() {
        return ptr::null();
    }
    // SAFETY: ctx is non-null and caller guarantees it is a live context
    let ctx = unsafe { &*ctx };
    // The CString's heap buffer stays put after the guard drops; the pointer
    // is valid until the next failing call replaces it or the context is freed.
    ctx.last_error
        .lock()
        .map_or(ptr::null(), |slot| slot.as_ref().map_or(ptr::null(), |e| e.as_ptr()))
}

/// Releases the context (shutting the router down via `Drop` if needed).
/// Freeing `NULL` is a no-op.
///
/// # Safety
/// `ctx` must come from `logcollector_init` and must not be used afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn logcollector_free(ctx: *mut LogCollectorContext) {
    if ctx.is_null() {
        return;
    }
    // SAFETY: ctx came from Box::into_raw in logcollector_init
    drop(unsafe { Box::from_raw(ctx) });
}
