//! Tests for `error` module.

use super::config::ConfigError;
use super::error::Error;

#[test]
fn test_error_codes_are_stable() {
    assert_eq!(Error::CapacityExceeded { capacity: 4 }.code(), "NAVG-001");
    assert_eq!(
        Error::DimensionMismatch {
            expected: 3,
            actual: 2
        }
        .code(),
        "NAVG-002"
    );
    assert_eq!(Error::InvalidVector("empty".into()).code(), "NAVG-003");
    assert_eq!(Error::Config("bad".into()).code(), "NAVG-004");
}

#[test]
fn test_error_display_includes_code_and_context() {
    let err = Error::DimensionMismatch {
        expected: 128,
        actual: 64,
    };
    let msg = err.to_string();
    assert!(msg.starts_with("[NAVG-002]"));
    assert!(msg.contains("expected 128, got 64"));
}

#[test]
fn test_config_error_converts() {
    let err: Error = ConfigError::InvalidValue {
        key: "index.m".to_string(),
        message: "must be >= 1".to_string(),
    }
    .into();

    assert_eq!(err.code(), "NAVG-004");
    assert!(err.to_string().contains("index.m"));
    assert!(!err.is_recoverable());
}

#[test]
fn test_runtime_errors_are_recoverable() {
    assert!(Error::CapacityExceeded { capacity: 1 }.is_recoverable());
    assert!(Error::InvalidVector("empty".into()).is_recoverable());
}
