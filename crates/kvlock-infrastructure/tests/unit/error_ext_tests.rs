//! Error Extension Tests

use kvlock_domain::Error;
use kvlock_infrastructure::error_ext::{ErrorContext, to_domain_error};
use std::io;

fn io_failure() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "no such file"))
}

#[test]
fn test_context_maps_to_infrastructure() {
    let err = io_failure().context("Loading state").unwrap_err();

    assert!(matches!(err, Error::Infrastructure { .. }));
    assert!(err.to_string().contains("Loading state: no such file"));
}

#[test]
fn test_typed_contexts() {
    assert!(matches!(
        io_failure().io_context("read").unwrap_err(),
        Error::Io { .. }
    ));
    assert!(matches!(
        io_failure().config_context("parse").unwrap_err(),
        Error::Configuration { .. }
    ));
}

#[test]
fn test_to_domain_error_keeps_source() {
    let err = to_domain_error(io::Error::other("boom"), "Writing");

    assert!(std::error::Error::source(&err).is_some());
    assert!(err.to_string().contains("Writing: boom"));
}
