//! Error types for METF core.

use thiserror::Error;

use crate::protocol::hex::HexError;

/// Core error type for client operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Device error: {0}")]
    Device(#[from] DeviceError),

    #[error("Encoding error: {0}")]
    Encoding(#[from] HexError),

    #[error("{0}")]
    Other(String),
}

impl CoreError {
    /// Status code and body of a non-success HTTP response, if this is one.
    pub fn http_status(&self) -> Option<(u16, &str)> {
        match self {
            CoreError::Device(DeviceError::HttpStatus { status, body }) => {
                Some((*status, body.as_str()))
            }
            _ => None,
        }
    }

    /// True for failures that never produced an HTTP response.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            CoreError::Device(DeviceError::Transport { .. } | DeviceError::Timeout { .. })
        )
    }
}

/// Device request errors
#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("Request to {url} timed out")]
    Timeout { url: String },

    #[error("HTTP Error ({status}): {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Unexpected response to {operation}: {body:?}")]
    InvalidResponse { operation: String, body: String },
}

impl DeviceError {
    pub(crate) fn invalid(operation: &str, body: impl Into<String>) -> Self {
        DeviceError::InvalidResponse {
            operation: operation.to_string(),
            body: body.into(),
        }
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
