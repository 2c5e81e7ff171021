//! Response validation for the device protocol.
//!
//! The firmware answers every request with a short plain-text body. These
//! helpers check a body against the shape an operation expects.

use crate::error::DeviceError;
use crate::protocol::hex;
use crate::types::Level;

/// Acknowledgement body for state-changing requests.
pub const OK_BODY: &str = "OK";

/// Body returned by `/ping`.
pub const PONG_BODY: &str = "pong";

/// Require the body to be exactly `expected`.
pub fn expect_literal(operation: &str, body: &str, expected: &str) -> Result<(), DeviceError> {
    if body == expected {
        Ok(())
    } else {
        Err(DeviceError::invalid(operation, body))
    }
}

/// Require the `"OK"` acknowledgement.
pub fn expect_ok(operation: &str, body: &str) -> Result<(), DeviceError> {
    expect_literal(operation, body, OK_BODY)
}

/// Require a non-empty body.
pub fn expect_non_empty(operation: &str, body: &str) -> Result<(), DeviceError> {
    if body.is_empty() {
        Err(DeviceError::invalid(operation, body))
    } else {
        Ok(())
    }
}

/// Parse a digital level, accepting only `"0"` and `"1"`.
pub fn parse_level(operation: &str, body: &str) -> Result<Level, DeviceError> {
    Level::from_body(body).ok_or_else(|| DeviceError::invalid(operation, body))
}

/// Decode a hex body into raw bytes.
pub fn parse_hex_bytes(operation: &str, body: &str) -> Result<Vec<u8>, DeviceError> {
    hex::hex_to_bytes(body).map_err(|_| DeviceError::invalid(operation, body))
}

/// Decode a hex body into text.
pub fn parse_hex_text(operation: &str, body: &str) -> Result<String, DeviceError> {
    hex::hex_to_str(body).map_err(|_| DeviceError::invalid(operation, body))
}
