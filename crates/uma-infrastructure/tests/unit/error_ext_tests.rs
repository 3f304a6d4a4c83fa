//! Tests for error context helpers

use std::io;

use uma_domain::Error;
use uma_infrastructure::error_ext::ErrorContext;

fn io_failure() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "missing"))
}

#[test]
fn test_context_wraps_as_infrastructure() {
    let err = io_failure().context("Failed to read file").unwrap_err();

    let Error::Infrastructure { message, source } = err else {
        panic!("expected infrastructure error");
    };
    assert_eq!(message, "Failed to read file: missing");
    assert!(source.is_some());
}

#[test]
fn test_with_context_is_lazy_message() {
    let err = io_failure()
        .with_context(|| format!("Failed to read {}", "uma.toml"))
        .unwrap_err();
    assert!(err.to_string().contains("Failed to read uma.toml: missing"));
}

#[test]
fn test_config_context_wraps_as_configuration() {
    let err = io_failure().config_context("Bad config").unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_ok_passes_through() {
    let value: Result<u8, io::Error> = Ok(7);
    assert_eq!(value.context("unused").unwrap(), 7);
}
