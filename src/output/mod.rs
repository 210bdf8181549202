//! Fallback sink abstraction.
//!
//! The fallback path piggybacks on whatever log channel the host already owns;
//! the `Sink` trait is that seam. The router ships with a stderr sink and
//! hosts (or tests) inject their own.

/// `Send + Sync` bounds enable concurrent logging from multiple threads
/// without locks on the trait object.
pub trait Sink: Send + Sync {
    /// Receives one fully formatted fallback line.
    fn write_line(&self, line: &str);
}

/// Default sink writing to stderr.
///
/// Write failures are swallowed: a record that cannot be delivered is dropped,
/// never surfaced as an error to the logging call site.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl Sink for StderrSink {
    fn write_line(&self, line: &str) {
        eprintln!("{line}");
    }
}
