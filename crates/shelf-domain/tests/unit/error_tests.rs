//! Tests for domain error construction and display

use shelf_domain::error::Error;

#[test]
fn test_not_found_display() {
    let err = Error::not_found("book 42");
    assert_eq!(err.to_string(), "Not found: book 42");
    assert!(err.is_not_found());
}

#[test]
fn test_configuration_with_source_keeps_source() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err = Error::configuration_with_source("cannot read config", io);

    assert!(err.to_string().contains("cannot read config"));
    assert!(std::error::Error::source(&err).is_some());
    assert!(!err.is_not_found());
}

#[test]
fn test_configuration_without_source() {
    let err = Error::configuration("auth.username is not set");
    assert_eq!(
        err.to_string(),
        "Configuration error: auth.username is not set"
    );
    assert!(std::error::Error::source(&err).is_none());
}

#[test]
fn test_internal_error_display() {
    let err = Error::internal("binding 'repository' lock poisoned");
    assert_eq!(
        err.to_string(),
        "Internal error: binding 'repository' lock poisoned"
    );
}
