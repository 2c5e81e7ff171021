//! Command implementations.

pub mod gpio;
pub mod i2c;
pub mod serial;
pub mod system;

pub use gpio::{run_blink, run_pin_mode, run_read, run_wait, run_write};
pub use i2c::run_i2c;
pub use serial::run_serial;
pub use system::{run_pins, run_ping, run_version};

use std::time::Duration;

use metf_core::{Board, ClientConfig, DeviceClient, Pin};

use crate::error::CliError;

/// Build a client for the device named on the command line.
pub fn connect(host: Option<&str>, port: u16, timeout_ms: u64) -> Result<DeviceClient, CliError> {
    let host = host.ok_or(CliError::MissingHost)?;
    let config = ClientConfig::new(host)
        .with_port(port)
        .with_timeout(Duration::from_millis(timeout_ms));
    Ok(DeviceClient::new(config)?)
}

/// Resolve a pin given as a number or, with a board, as a pin name.
pub fn resolve_pin(arg: &str, board: Option<Board>) -> Result<Pin, CliError> {
    if let Ok(pin) = arg.parse::<Pin>() {
        return Ok(pin);
    }

    match board {
        Some(board) => board.pin(arg).ok_or_else(|| {
            CliError::InvalidArgument(format!("Unknown pin '{}' on {}", arg, board.display_name()))
        }),
        None => Err(CliError::InvalidArgument(format!(
            "Pin '{}' is not a number (pass --board to use pin names)",
            arg
        ))),
    }
}
