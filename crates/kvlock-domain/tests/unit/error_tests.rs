//! Unit tests for domain error types

use kvlock_domain::Error;

#[test]
fn test_invalid_argument_error() {
    let error = Error::invalid_argument("Invalid input provided");
    match error {
        Error::InvalidArgument { message } => assert_eq!(message, "Invalid input provided"),
        _ => panic!("Expected InvalidArgument error"),
    }
}

#[test]
fn test_store_error() {
    let error = Error::store("Connection refused");
    match error {
        Error::Store { message, source } => {
            assert_eq!(message, "Connection refused");
            assert!(source.is_none());
        }
        _ => panic!("Expected Store error"),
    }
}

#[test]
fn test_store_error_with_source() {
    let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
    let error = Error::store_with_source("GET failed", io);
    assert!(std::error::Error::source(&error).is_some());
    assert_eq!(format!("{}", error), "Store error: GET failed");
}

#[test]
fn test_configuration_error() {
    let error = Error::configuration("Lock poll interval cannot be 0");
    assert!(matches!(error, Error::Configuration { source: None, .. }));
    assert_eq!(
        error.to_string(),
        "Configuration error: Lock poll interval cannot be 0"
    );
}

#[test]
fn test_infrastructure_error_with_source() {
    let io = std::io::Error::other("subscriber already set");
    let error = Error::infrastructure_with_source("Failed to install log subscriber", io);
    assert!(std::error::Error::source(&error).is_some());
    assert!(matches!(error, Error::Infrastructure { .. }));
}
