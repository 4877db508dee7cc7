//! Tests for core_kernel error types

use core_kernel::error::CoreError;
use core_kernel::ports::PortError;

#[test]
fn test_core_error_validation() {
    let error = CoreError::validation("Invalid input");

    match error {
        CoreError::Validation(msg) => assert_eq!(msg, "Invalid input"),
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_core_error_invalid_state() {
    let error = CoreError::invalid_state("Cannot transition from A to B");

    match error {
        CoreError::InvalidStateTransition(msg) => assert!(msg.contains("Cannot transition")),
        _ => panic!("Expected InvalidStateTransition error"),
    }
}

#[test]
fn test_core_error_not_found() {
    let error = CoreError::not_found("Company not found");

    match error {
        CoreError::NotFound(msg) => assert_eq!(msg, "Company not found"),
        _ => panic!("Expected NotFound error"),
    }
}

#[test]
fn test_core_error_display() {
    let error = CoreError::validation("Test error");
    let display = format!("{}", error);

    assert!(display.contains("Validation error"));
}

#[test]
fn test_port_error_classification() {
    assert!(PortError::not_found("Claim", "abc").is_not_found());
    assert!(PortError::conflict("duplicate pending claim").is_conflict());
    assert!(PortError::connection("refused").is_transient());
    assert!(!PortError::validation("bad field").is_transient());
}
