//! Tests for the fallback formatter's fixed layout.

use logcollector::fmt::{format_record, render};

const TS: &str = "2026-08-28 10:15:00";

#[test]
fn layout_is_timestamp_label_func_line_text() {
    let line = format_record(TS, 4, "UNetDriver::TickDispatch", 231, "Socket ready");
    assert_eq!(
        line,
        "2026-08-28 10:15:00 INFO    [UNetDriver::TickDispatch@231] Socket ready"
    );
}

#[test]
fn label_mapping_is_fixed_and_padded_to_eight() {
    let cases = [
        (1, "FATAL   "),
        (2, "ERROR   "),
        (3, "WARNING "),
        (4, "INFO    "),
        (5, "DEBUG   "),
        (6, "VERBOSE "),
    ];
    for (severity, label) in cases {
        let line = format_record(TS, severity, "f", 0, "x");
        assert_eq!(line, format!("{TS} {label}[f@0] x"));
    }
}

#[test]
fn unknown_severity_maps_to_none_label() {
    for severity in [0, 7, -3] {
        let line = format_record(TS, severity, "f", 1, "x");
        assert_eq!(line, format!("{TS} NONE    [f@1] x"));
    }
}

#[test]
fn render_stamps_a_timestamp() {
    let line = render(2, "Loader::Mount", 17, "pak missing");
    // "YYYY-MM-DD HH:MM:SS " prefix, then the fixed layout
    assert_eq!(&line[19..], " ERROR   [Loader::Mount@17] pak missing");
    assert_eq!(line.as_bytes()[4], b'-');
    assert_eq!(line.as_bytes()[13], b':');
}
