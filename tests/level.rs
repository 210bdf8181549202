//! Tests for severity functionality.

use logcollector::Severity;

#[test]
fn severity_ordinals_match_backend_contract() {
    assert_eq!(Severity::None as i32, 0);
    assert_eq!(Severity::Fatal as i32, 1);
    assert_eq!(Severity::Error as i32, 2);
    assert_eq!(Severity::Warning as i32, 3);
    assert_eq!(Severity::Info as i32, 4);
    assert_eq!(Severity::Debug as i32, 5);
    assert_eq!(Severity::Verbose as i32, 6);
}

#[test]
fn severity_from_ordinal_round_trips() {
    for severity in Severity::all() {
        assert_eq!(Severity::from_ordinal(severity as i32), severity);
    }
}

#[test]
fn severity_from_ordinal_unknown_is_none() {
    assert_eq!(Severity::from_ordinal(7), Severity::None);
    assert_eq!(Severity::from_ordinal(-1), Severity::None);
    assert_eq!(Severity::from_ordinal(i32::MAX), Severity::None);
}

#[test]
fn severity_display() {
    assert_eq!(Severity::Fatal.to_string(), "fatal");
    assert_eq!(Severity::Warning.to_string(), "warning");
    assert_eq!(Severity::Verbose.to_string(), "verbose");
}

#[test]
fn severity_labels() {
    assert_eq!(Severity::None.label(), "NONE");
    assert_eq!(Severity::Fatal.label(), "FATAL");
    assert_eq!(Severity::Error.label(), "ERROR");
    assert_eq!(Severity::Warning.label(), "WARNING");
    assert_eq!(Severity::Info.label(), "INFO");
    assert_eq!(Severity::Debug.label(), "DEBUG");
    assert_eq!(Severity::Verbose.label(), "VERBOSE");
}

#[test]
fn severity_from_str() {
    assert_eq!("debug".parse::<Severity>().unwrap(), Severity::Debug);
    assert_eq!("WARN".parse::<Severity>().unwrap(), Severity::Warning);
    assert_eq!("Err".parse::<Severity>().unwrap(), Severity::Error);
    assert_eq!("verbose".parse::<Severity>().unwrap(), Severity::Verbose);
    assert_eq!("none".parse::<Severity>().unwrap(), Severity::None);
}

#[test]
fn severity_from_str_invalid() {
    assert!("loud".parse::<Severity>().is_err());
}

#[test]
fn severity_default_is_none() {
    assert_eq!(Severity::default(), Severity::None);
}
