//! Value types shared by the client and its callers.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// GPIO pin number. Range and capabilities are checked by the firmware only.
pub type Pin = u8;

/// Default baud rate for `serial_begin`.
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

/// Default timeout for `wait_digital`.
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(5);

/// GPIO pin configuration.
///
/// The wire values follow the ESP32 Arduino core (`INPUT = 0x01`,
/// `OUTPUT = 0x03`, `INPUT_PULLUP = 0x05`); the firmware passes them to
/// `pinMode()` unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PinMode {
    Input,
    InputPullup,
    Output,
}

impl PinMode {
    /// Integer sent in the `mode` form field.
    pub fn wire_value(self) -> u8 {
        match self {
            PinMode::Input => 0x01,
            PinMode::Output => 0x03,
            PinMode::InputPullup => 0x05,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PinMode::Input => "INPUT",
            PinMode::InputPullup => "INPUT_PULLUP",
            PinMode::Output => "OUTPUT",
        }
    }
}

impl fmt::Display for PinMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Digital logic level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Low,
    High,
}

impl Level {
    pub fn wire_value(self) -> u8 {
        match self {
            Level::Low => 0,
            Level::High => 1,
        }
    }

    /// Parse a `digitalRead` body. Only the exact strings "0" and "1" are accepted.
    pub fn from_body(body: &str) -> Option<Self> {
        match body {
            "0" => Some(Level::Low),
            "1" => Some(Level::High),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Low => f.write_str("LOW"),
            Level::High => f.write_str("HIGH"),
        }
    }
}

/// Pin selection for `i2c_begin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum I2cPins {
    /// Let the firmware use its default SDA/SCL pins.
    #[default]
    Default,
    Custom { sda: Pin, scl: Pin },
}

/// Options for `serial_readlines`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadlinesOptions {
    /// How long to keep polling for the first chunk of output.
    pub wait: Duration,
    /// Split the output into lines on this string. `None` returns the raw text.
    pub delimiter: Option<String>,
    /// Segments that do not start with this prefix are glued onto the previous line.
    pub prefix: Option<String>,
}

impl Default for ReadlinesOptions {
    fn default() -> Self {
        Self {
            wait: Duration::from_millis(5000),
            delimiter: Some("\n".to_string()),
            prefix: Some("00:".to_string()),
        }
    }
}

/// Output drained from the device's serial buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "data")]
pub enum SerialOutput {
    Lines(Vec<String>),
    Raw(String),
}
