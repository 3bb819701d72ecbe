//! # Error Taxonomy Tests
//!
//! Checks the messages and conversions of the error types surfaced by steps.

use cachesim_core::common::{AccessError, DecodeError, StepError};
use cachesim_core::isa::decode;

#[test]
fn access_error_names_address_and_size() {
    let err = AccessError::AddressOutOfRange { addr: 999, size: 10 };
    assert_eq!(
        err.to_string(),
        "address 999 is outside memory (valid range 0..10)"
    );
}

#[test]
fn decode_error_keeps_raw_line() {
    let err = decode("MUL R1, R2, R3").unwrap_err();
    assert_eq!(err.line(), "MUL R1, R2, R3");

    let err = decode("LOAD R9, 1").unwrap_err();
    assert_eq!(err.line(), "LOAD R9, 1");
}

#[test]
fn step_error_from_decode_error_keeps_kind() {
    let invalid = decode("ADD R1, R2").unwrap_err();
    assert!(matches!(
        StepError::from(invalid),
        StepError::InvalidInstruction(DecodeError::Invalid { .. })
    ));

    let unknown = decode("JMP 4").unwrap_err();
    assert!(matches!(
        StepError::from(unknown),
        StepError::UnrecognizedInstruction(DecodeError::Unrecognized { .. })
    ));
}

#[test]
fn step_error_display_is_transparent() {
    let access = AccessError::AddressOutOfRange { addr: -1, size: 10 };
    assert_eq!(StepError::from(access).to_string(), access.to_string());

    let decode_err = decode("NOP").unwrap_err();
    let text = decode_err.to_string();
    assert_eq!(StepError::from(decode_err).to_string(), text);
}

#[test]
fn step_error_forwards_source() {
    use std::error::Error;

    let access = AccessError::AddressOutOfRange { addr: 999, size: 10 };
    let step_err = StepError::from(access);
    assert!(step_err.source().is_none());
    assert!(access.source().is_none());
}
