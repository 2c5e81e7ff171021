//! ESP32-C6 Super Mini pin map.

use super::PinEntry;
use crate::types::Pin;

pub const GPIO0: Pin = 0;
pub const GPIO1: Pin = 1;
pub const GPIO2: Pin = 2;
pub const GPIO3: Pin = 3;
pub const GPIO4: Pin = 4;
pub const GPIO5: Pin = 5;
pub const GPIO6: Pin = 6;
pub const GPIO7: Pin = 7;
pub const GPIO8: Pin = 8;
pub const GPIO9: Pin = 9;
pub const GPIO10: Pin = 10;
pub const GPIO11: Pin = 11;
pub const GPIO12: Pin = 12;
pub const GPIO13: Pin = 13;
pub const GPIO14: Pin = 14;
pub const GPIO15: Pin = 15;
pub const GPIO16: Pin = 16;
pub const GPIO17: Pin = 17;
pub const GPIO18: Pin = 18;
pub const GPIO19: Pin = 19;
pub const GPIO20: Pin = 20;
pub const GPIO21: Pin = 21;
pub const GPIO22: Pin = 22;
pub const GPIO23: Pin = 23;

// UART0, shared with USB serial
pub const UART_TX: Pin = GPIO17;
pub const UART_RX: Pin = GPIO16;

pub const SDA: Pin = GPIO6;
pub const SCL: Pin = GPIO7;

pub const MOSI: Pin = GPIO4;
pub const MISO: Pin = GPIO5;
pub const SCK: Pin = GPIO6;
pub const CS: Pin = GPIO7;

pub const LED_BUILTIN: Pin = GPIO15;

/// Boot mode strapping pin.
pub const BOOT: Pin = GPIO9;
pub const FLASH_BUTTON: Pin = GPIO0;

pub const PINS: &[PinEntry] = &[
    ("GPIO0", GPIO0),
    ("GPIO1", GPIO1),
    ("GPIO2", GPIO2),
    ("GPIO3", GPIO3),
    ("GPIO4", GPIO4),
    ("GPIO5", GPIO5),
    ("GPIO6", GPIO6),
    ("GPIO7", GPIO7),
    ("GPIO8", GPIO8),
    ("GPIO9", GPIO9),
    ("GPIO10", GPIO10),
    ("GPIO11", GPIO11),
    ("GPIO12", GPIO12),
    ("GPIO13", GPIO13),
    ("GPIO14", GPIO14),
    ("GPIO15", GPIO15),
    ("GPIO16", GPIO16),
    ("GPIO17", GPIO17),
    ("GPIO18", GPIO18),
    ("GPIO19", GPIO19),
    ("GPIO20", GPIO20),
    ("GPIO21", GPIO21),
    ("GPIO22", GPIO22),
    ("GPIO23", GPIO23),
    ("UART_TX", UART_TX),
    ("UART_RX", UART_RX),
    ("SDA", SDA),
    ("SCL", SCL),
    ("MOSI", MOSI),
    ("MISO", MISO),
    ("SCK", SCK),
    ("CS", CS),
    ("LED_BUILTIN", LED_BUILTIN),
    ("BOOT", BOOT),
    ("FLASH_BUTTON", FLASH_BUTTON),
];
