//! METF core - host-side client for the MCU ESP Test Framework.
//!
//! Drives GPIO, I2C and serial on an ESP8266/ESP32 board running the METF
//! firmware, one blocking HTTP request per operation.

pub mod boards;
pub mod config;
pub mod device;
pub mod error;
pub mod protocol;
pub mod types;

pub use boards::Board;
pub use config::ClientConfig;
pub use device::DeviceClient;
pub use error::{CoreError, DeviceError, Result};
pub use types::{
    I2cPins, Level, Pin, PinMode, ReadlinesOptions, SerialOutput, DEFAULT_BAUD_RATE,
    DEFAULT_WAIT_TIMEOUT,
};
