//! Request builders for the METF firmware HTTP API.
//!
//! Every endpoint is relative to `http://<host>:<port>`. GET requests carry
//! their fields in the query string, POST requests as a url-encoded form.

use crate::protocol::hex;
use crate::types::{I2cPins, Level, Pin, PinMode};

pub const VERSION_PATH: &str = "/version";
pub const PING_PATH: &str = "/ping";
pub const PIN_MODE_PATH: &str = "/pinMode";
pub const DIGITAL_READ_PATH: &str = "/digitalRead";
pub const DIGITAL_WRITE_PATH: &str = "/digitalWrite";
pub const I2C_PATH: &str = "/i2c";
pub const SERIAL_PATH: &str = "/serial";
pub const SERIAL_READ_PATH: &str = "/read";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A fully described request, ready for a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub path: &'static str,
    pub fields: Vec<(&'static str, String)>,
}

impl Request {
    fn get(path: &'static str) -> Self {
        Self {
            method: Method::Get,
            path,
            fields: Vec::new(),
        }
    }

    fn post(path: &'static str) -> Self {
        Self {
            method: Method::Post,
            path,
            fields: Vec::new(),
        }
    }

    fn field(mut self, name: &'static str, value: impl ToString) -> Self {
        self.fields.push((name, value.to_string()));
        self
    }

    /// Value of a field, if present.
    pub fn get_field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Request builders for the device protocol
pub struct Requests;

impl Requests {
    // ==================== System ====================

    pub fn version() -> Request {
        Request::get(VERSION_PATH)
    }

    pub fn ping() -> Request {
        Request::get(PING_PATH)
    }

    // ==================== GPIO ====================

    pub fn pin_mode(pin: Pin, mode: PinMode) -> Request {
        Request::post(PIN_MODE_PATH)
            .field("pin", pin)
            .field("mode", mode.wire_value())
    }

    pub fn digital_read(pin: Pin) -> Request {
        Request::get(DIGITAL_READ_PATH).field("pin", pin)
    }

    pub fn digital_write(pin: Pin, value: Level) -> Request {
        Request::post(DIGITAL_WRITE_PATH)
            .field("pin", pin)
            .field("value", value.wire_value())
    }

    // ==================== I2C ====================

    /// Generic I2C action; `fields` follow the `action` field in order.
    pub fn i2c(action: &str, fields: &[(&'static str, String)]) -> Request {
        let mut request = Request::post(I2C_PATH).field("action", action);
        request.fields.extend(fields.iter().cloned());
        request
    }

    pub fn i2c_begin(pins: I2cPins) -> Request {
        match pins {
            I2cPins::Default => Self::i2c("begin", &[]),
            I2cPins::Custom { sda, scl } => Self::i2c(
                "begin",
                &[("sda_pin", sda.to_string()), ("scl_pin", scl.to_string())],
            ),
        }
    }

    pub fn i2c_set_clock(clock: u32) -> Request {
        Self::i2c("setClock", &[("value", clock.to_string())])
    }

    pub fn i2c_set_clock_stretch_limit(limit: u32) -> Request {
        Self::i2c("setClockStretchLimit", &[("value", limit.to_string())])
    }

    /// Write `payload` to `address` and read back `response_len` bytes.
    pub fn i2c_ask(address: u8, payload: &[u8], response_len: usize) -> Request {
        Self::i2c(
            "ask",
            &[
                ("address", address.to_string()),
                ("hexstring", hex::bytes_to_hex(payload)),
                ("response", response_len.to_string()),
            ],
        )
    }

    pub fn i2c_flush() -> Request {
        Self::i2c("flush", &[])
    }

    // ==================== Serial ====================

    pub fn serial_begin(baud: u32) -> Request {
        Request::post(SERIAL_PATH).field("baudrate", baud)
    }

    pub fn serial_flush() -> Request {
        Request::post(SERIAL_PATH).field("flush", 1)
    }

    pub fn serial_read() -> Request {
        Request::get(SERIAL_READ_PATH)
    }
}
