//! Error types for METF CLI.
//!
//! CliError wraps CoreError from the client library and adds CLI-specific variants.

use metf_core::error::CoreError;
use thiserror::Error;

pub use metf_core::error::DeviceError;

/// Exit codes for the CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NETWORK_ERROR: i32 = 2;
    pub const DEVICE_ERROR: i32 = 3;
    pub const INVALID_ARGS: i32 = 4;
    pub const CONDITION_NOT_MET: i32 = 5;
}

/// Main error type for the CLI
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Core(#[from] CoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No device host given (use --host or METF_HOST)")]
    MissingHost,

    #[error("Condition not met: {0}")]
    ConditionNotMet(String),

    #[error("{0}")]
    Other(String),
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Core(e) => match e {
                e if e.is_network() => exit_codes::NETWORK_ERROR,
                CoreError::Device(_) => exit_codes::DEVICE_ERROR,
                CoreError::Encoding(_) => exit_codes::INVALID_ARGS,
                CoreError::Other(_) => exit_codes::GENERAL_ERROR,
            },
            CliError::Io(_) => exit_codes::GENERAL_ERROR,
            CliError::InvalidArgument(_) => exit_codes::INVALID_ARGS,
            CliError::MissingHost => exit_codes::INVALID_ARGS,
            CliError::ConditionNotMet(_) => exit_codes::CONDITION_NOT_MET,
            CliError::Other(_) => exit_codes::GENERAL_ERROR,
        }
    }
}

impl From<DeviceError> for CliError {
    fn from(e: DeviceError) -> Self {
        CliError::Core(CoreError::Device(e))
    }
}
