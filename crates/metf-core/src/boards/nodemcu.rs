//! NodeMCU (ESP8266) pin map.
//!
//! See <https://randomnerdtutorials.com/esp8266-pinout-reference-gpios/>.

use super::PinEntry;
use crate::types::Pin;

/// No interrupt, PWM or I2C. HIGH at boot, wakes from deep sleep.
pub const D0: Pin = 16;
/// Often SCL.
pub const D1: Pin = 5;
/// Often SDA.
pub const D2: Pin = 4;
/// FLASH button, pulled up. Boot fails if pulled LOW.
pub const D3: Pin = 0;
/// On-board LED, pulled up. Boot fails if pulled LOW.
pub const D4: Pin = 2;
/// SPI SCLK
pub const D5: Pin = 14;
/// SPI MISO
pub const D6: Pin = 12;
/// SPI MOSI
pub const D7: Pin = 13;
/// SPI CS, pulled to GND. Boot fails if pulled HIGH.
pub const D8: Pin = 15;
/// RX, HIGH at boot.
pub const D9: Pin = 3;
/// TX, HIGH at boot, debug output at boot.
pub const D10: Pin = 1;

pub const RX: Pin = D9;
pub const TX: Pin = D10;

pub const LED_BUILTIN: Pin = D4;
/// Second LED on the NodeMCU carrier board.
pub const LED_BUILTIN_AUX: Pin = D0;

pub const PINS: &[PinEntry] = &[
    ("D0", D0),
    ("D1", D1),
    ("D2", D2),
    ("D3", D3),
    ("D4", D4),
    ("D5", D5),
    ("D6", D6),
    ("D7", D7),
    ("D8", D8),
    ("D9", D9),
    ("D10", D10),
    ("RX", RX),
    ("TX", TX),
    ("LED_BUILTIN", LED_BUILTIN),
    ("LED_BUILTIN_AUX", LED_BUILTIN_AUX),
];
