//! Fallback record formatting.
//!
//! When the backend is inactive, records are rendered as plain text and handed
//! to the host's own log channel. The layout is fixed:
//! `<timestamp> <LABEL padded to 8> [<func>@<line>] <text>`.

use crate::level::Severity;
use chrono::Local;

/// Timestamp layout used on every fallback line.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Pure formatter over an explicit timestamp so tests can assert exact output.
///
/// The label column is 8 wide: the longest label (`VERBOSE`) plus one space.
#[must_use]
pub fn format_record(timestamp: &str, severity: i32, func: &str, line: usize, text: &str) -> String {
    let label = Severity::from_ordinal(severity).label();
    format!("{timestamp} {label:<8}[{func}@{line}] {text}")
}

/// Stamps the current local time and formats the record for the fallback sink.
#[must_use]
pub fn render(severity: i32, func: &str, line: usize, text: &str) -> String {
    let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
    format_record(&timestamp, severity, func, line, text)
}
