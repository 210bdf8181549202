//! Tests for FFI functionality.

#![cfg(feature = "ffi")]

use logcollector::{
    LOGCOLLECTOR_SEVERITY_DEBUG, LOGCOLLECTOR_SEVERITY_ERROR, LOGCOLLECTOR_SEVERITY_FATAL,
    LOGCOLLECTOR_SEVERITY_INFO, LOGCOLLECTOR_SEVERITY_NONE, LOGCOLLECTOR_SEVERITY_VERBOSE,
    LOGCOLLECTOR_SEVERITY_WARNING, logcollector_diagnostic_count, logcollector_free,
    logcollector_get_diagnostic, logcollector_get_last_error, logcollector_init,
    logcollector_record, logcollector_shutdown,
};
use std::ffi::{CStr, CString};
use std::ptr;
use tempfile::TempDir;

#[test]
fn init_record_shutdown_free() {
    let tmp = TempDir::new().unwrap();
    let root = CString::new(tmp.path().to_str().unwrap()).unwrap();

    let ctx = unsafe { logcollector_init(root.as_ptr(), root.as_ptr(), ptr::null()) };
    assert!(!ctx.is_null());

    // No config and no backend library on disk: diagnostics for both
    let count = unsafe { logcollector_diagnostic_count(ctx) };
    assert!(count >= 2);

    let mut severity = -1;
    let message = unsafe { logcollector_get_diagnostic(ctx, 0, &raw mut severity) };
    assert!(!message.is_null());
    assert_eq!(severity, LOGCOLLECTOR_SEVERITY_WARNING);
    let text = unsafe { CStr::from_ptr(message) }.to_str().unwrap();
    assert!(text.contains("config"));

    let func = CString::new("Host::Boot").unwrap();
    let text = CString::new("hello from C").unwrap();
    unsafe {
        logcollector_record(ctx, LOGCOLLECTOR_SEVERITY_INFO, func.as_ptr(), text.as_ptr(), 12);
        logcollector_shutdown(ctx);
        logcollector_shutdown(ctx);
        logcollector_free(ctx);
    }
}

#[test]
fn diagnostic_out_of_range_is_null() {
    let tmp = TempDir::new().unwrap();
    let root = CString::new(tmp.path().to_str().unwrap()).unwrap();

    let ctx = unsafe { logcollector_init(root.as_ptr(), root.as_ptr(), ptr::null()) };
    assert!(unsafe { logcollector_get_diagnostic(ctx, 999, ptr::null_mut()) }.is_null());
    assert!(unsafe { logcollector_get_diagnostic(ctx, -1, ptr::null_mut()) }.is_null());
    unsafe { logcollector_free(ctx) };
}

#[test]
fn null_context_is_tolerated_everywhere() {
    let func = CString::new("f").unwrap();
    unsafe {
        logcollector_record(ptr::null_mut(), 1, func.as_ptr(), func.as_ptr(), 0);
        logcollector_shutdown(ptr::null_mut());
        assert_eq!(logcollector_diagnostic_count(ptr::null()), 0);
        assert!(logcollector_get_diagnostic(ptr::null(), 0, ptr::null_mut()).is_null());
        assert!(logcollector_get_last_error(ptr::null()).is_null());
        logcollector_free(ptr::null_mut());
    }
}

#[test]
fn last_error_starts_null() {
    let tmp = TempDir::new().unwrap();
    let root = CString::new(tmp.path().to_str().unwrap()).unwrap();

    let ctx = unsafe { logcollector_init(root.as_ptr(), root.as_ptr(), ptr::null()) };
    assert!(unsafe { logcollector_get_last_error(ctx) }.is_null());
    unsafe { logcollector_free(ctx) };
}

#[test]
fn invalid_utf8_record_sets_last_error() {
    let tmp = TempDir::new().unwrap();
    let root = CString::new(tmp.path().to_str().unwrap()).unwrap();

    let ctx = unsafe { logcollector_init(root.as_ptr(), root.as_ptr(), ptr::null()) };
    assert!(unsafe { logcollector_get_last_error(ctx) }.is_null());

    let func = CString::new("Host::Boot").unwrap();
    // Malformed UTF-8 sequence, nul-terminated
    let bad_text: [u8; 5] = [0xf0, 0x28, 0x8c, 0x28, 0x00];
    unsafe {
        logcollector_record(
            ctx,
            LOGCOLLECTOR_SEVERITY_INFO,
            func.as_ptr(),
            bad_text.as_ptr().cast(),
            0,
        );
    }

    let err = unsafe { logcollector_get_last_error(ctx) };
    assert!(!err.is_null());
    let text = unsafe { CStr::from_ptr(err) }.to_str().unwrap();
    assert!(text.contains("UTF-8"));
    unsafe { logcollector_free(ctx) };
}

#[test]
fn context_is_shareable_across_threads() {
    fn assert_sync<T: Sync>() {}
    assert_sync::<logcollector::LogCollectorContext>();
}

#[test]
fn severity_constants_match_ordinals() {
    assert_eq!(LOGCOLLECTOR_SEVERITY_NONE, 0);
    assert_eq!(LOGCOLLECTOR_SEVERITY_FATAL, 1);
    assert_eq!(LOGCOLLECTOR_SEVERITY_ERROR, 2);
    assert_eq!(LOGCOLLECTOR_SEVERITY_WARNING, 3);
    assert_eq!(LOGCOLLECTOR_SEVERITY_INFO, 4);
    assert_eq!(LOGCOLLECTOR_SEVERITY_DEBUG, 5);
    assert_eq!(LOGCOLLECTOR_SEVERITY_VERBOSE, 6);
}
