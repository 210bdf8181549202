//! The shim's own diagnostic channel.
//!
//! A logging component cannot log through itself while it is still coming up,
//! so startup tracing goes straight to stderr, gated by the `LOGCOLLECTOR_LOG`
//! environment variable (a severity name; unset means silent). The variable is
//! read once into a `OnceLock`, even if multiple entry points (library, FFI,
//! tests) race to emit first.

use crate::level::Severity;
use std::sync::OnceLock;

const ENV_VAR: &str = "LOGCOLLECTOR_LOG";

static THRESHOLD: OnceLock<Option<Severity>> = OnceLock::new();

fn threshold() -> Option<Severity> {
    *THRESHOLD.get_or_init(|| std::env::var(ENV_VAR).ok().and_then(|v| v.parse().ok()))
}

/// Pre-init or ungated calls silently vanish rather than crashing.
fn log(severity: Severity, scope: &str, msg: &str) {
    let Some(max) = threshold() else {
        return;
    };
    if severity <= max {
        eprintln!("logcollector [{scope}] {}: {msg}", severity.label());
    }
}

/// Errors inside the shim itself — never surfaced past stderr.
pub fn error(scope: &str, msg: &str) {
    log(Severity::Error, scope, msg);
}

/// Anomalies worth knowing about when diagnosing the shim.
pub fn warn(scope: &str, msg: &str) {
    log(Severity::Warning, scope, msg);
}

/// Startup milestones — config loaded, backend bound.
pub fn info(scope: &str, msg: &str) {
    log(Severity::Info, scope, msg);
}

/// Step-by-step startup tracing.
pub fn debug(scope: &str, msg: &str) {
    log(Severity::Debug, scope, msg);
}

/// High-volume per-record tracing.
pub fn verbose(scope: &str, msg: &str) {
    log(Severity::Verbose, scope, msg);
}
