//! Pin maps for supported boards.
//!
//! Lets scripts and the CLI refer to pins by the names printed on the board
//! (`D5`, `LED_BUILTIN`) instead of raw GPIO numbers.

pub mod esp32c6;
pub mod nodemcu;

use std::fmt;

use serde::Serialize;

use crate::types::Pin;

/// A named pin and its GPIO number.
pub type PinEntry = (&'static str, Pin);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Board {
    /// NodeMCU / WeMos (ESP8266)
    #[serde(rename = "nodemcu")]
    NodeMcu,
    /// ESP32-C6 Super Mini
    #[serde(rename = "esp32c6")]
    Esp32C6SuperMini,
}

impl Board {
    pub const ALL: [Board; 2] = [Board::NodeMcu, Board::Esp32C6SuperMini];

    pub fn pins(self) -> &'static [PinEntry] {
        match self {
            Board::NodeMcu => nodemcu::PINS,
            Board::Esp32C6SuperMini => esp32c6::PINS,
        }
    }

    /// Look up a pin by name, ignoring case.
    pub fn pin(self, name: &str) -> Option<Pin> {
        self.pins()
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, pin)| *pin)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Board::NodeMcu => "nodemcu",
            Board::Esp32C6SuperMini => "esp32c6",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Board::NodeMcu => "NodeMCU (ESP8266)",
            Board::Esp32C6SuperMini => "ESP32-C6 Super Mini",
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
