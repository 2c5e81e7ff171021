//! Client for the METF firmware running on a test board.

use std::time::Duration;

use log::Level as LogLevel;

use super::clock::{Clock, SystemClock};
use super::observer::{ClientObserver, LogObserver};
use super::transport::{HttpTransport, Transport};
use crate::config::ClientConfig;
use crate::error::{DeviceError, Result};
use crate::protocol::hex;
use crate::protocol::requests::{Request, Requests};
use crate::protocol::response::{self, PONG_BODY};
use crate::protocol::serial::reassemble_lines;
use crate::types::{I2cPins, Level, Pin, PinMode, ReadlinesOptions, SerialOutput};

/// Pause between reads in `wait_digital`.
pub const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(300);

/// Pause between reads in `serial_readlines`.
pub const SERIAL_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Blocking client for one device.
///
/// Every method performs at most one HTTP round-trip per step, bounded by the
/// configured timeout. Nothing is retried: failures go straight back to the
/// caller.
pub struct DeviceClient {
    config: ClientConfig,
    transport: Box<dyn Transport>,
    clock: Box<dyn Clock>,
    observer: Box<dyn ClientObserver>,
}

impl DeviceClient {
    /// Create a client that talks HTTP to `config.host` and logs through `log`.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_parts(
            config,
            Box::new(transport),
            Box::new(SystemClock),
            Box::new(LogObserver),
        ))
    }

    /// Create a client over custom transport, clock and observer.
    pub fn with_parts(
        config: ClientConfig,
        transport: Box<dyn Transport>,
        clock: Box<dyn Clock>,
        observer: Box<dyn ClientObserver>,
    ) -> Self {
        let client = Self {
            config,
            transport,
            clock,
            observer,
        };
        client.info(&format!(
            "Testing: {}:{}",
            client.config.host, client.config.port
        ));
        client
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> String {
        self.config.base_url()
    }

    fn info(&self, message: &str) {
        self.observer.record(LogLevel::Info, message);
    }

    /// Send a request and return the body of a 2xx response.
    fn execute(&self, request: &Request) -> Result<String> {
        let response = self.transport.send(request)?;
        if !response.is_success() {
            self.observer.record(
                LogLevel::Error,
                &format!("{} -> HTTP {}: {}", request.path, response.status, response.body),
            );
            return Err(DeviceError::HttpStatus {
                status: response.status,
                body: response.body,
            }
            .into());
        }
        self.observer.record(
            LogLevel::Debug,
            &format!("{} -> {:?}", request.path, response.body),
        );
        Ok(response.body)
    }

    // ==================== System ====================

    /// Firmware version string.
    pub fn version(&self) -> Result<String> {
        self.info("version");
        let body = self.execute(&Requests::version())?;
        response::expect_non_empty("version", &body)?;
        Ok(body)
    }

    pub fn ping(&self) -> Result<()> {
        self.info("ping");
        let body = self.execute(&Requests::ping())?;
        response::expect_literal("ping", &body, PONG_BODY)?;
        Ok(())
    }

    // ==================== GPIO ====================

    pub fn pin_mode(&self, pin: Pin, mode: PinMode) -> Result<()> {
        self.info(&format!("set pinMode {} {}", pin, mode));
        let body = self.execute(&Requests::pin_mode(pin, mode))?;
        response::expect_ok("pinMode", &body)?;
        Ok(())
    }

    pub fn digital_read(&self, pin: Pin) -> Result<Level> {
        self.info(&format!("digitalRead {}", pin));
        let body = self.execute(&Requests::digital_read(pin))?;
        Ok(response::parse_level("digitalRead", &body)?)
    }

    pub fn digital_write(&self, pin: Pin, value: Level) -> Result<()> {
        self.info(&format!("digitalWrite {} {}", pin, value));
        let body = self.execute(&Requests::digital_write(pin, value))?;
        response::expect_ok("digitalWrite", &body)?;
        Ok(())
    }

    /// Block the caller for `msec` milliseconds.
    pub fn delay(&self, msec: u64) {
        self.info(&format!("delay {} msec", msec));
        self.clock.sleep(Duration::from_millis(msec));
    }

    /// Poll `pin` until it reads `value` or `timeout` elapses.
    ///
    /// Returns `true` as soon as a read observes `value`.
    pub fn wait_digital(&self, pin: Pin, value: Level, timeout: Duration) -> Result<bool> {
        self.info(&format!(
            "wait_digital {} {} for {:.1} s",
            pin,
            value,
            timeout.as_secs_f64()
        ));
        let start = self.clock.now();
        loop {
            if self.clock.now().duration_since(start) >= timeout {
                return Ok(false);
            }
            if self.digital_read(pin)? == value {
                return Ok(true);
            }
            self.clock.sleep(WAIT_POLL_INTERVAL);
        }
    }

    /// Drive `pin` to its "on" level for `duration` ms, then to "off".
    ///
    /// "On" is HIGH, or LOW when `invert` is set (active-low LEDs).
    pub fn blynk(&self, pin: Pin, duration: u64, invert: bool) -> Result<()> {
        self.blynk_with_levels(pin, duration, invert, Level::Low, Level::High)
    }

    /// [`blynk`](Self::blynk) with explicit levels for "off" (`low`) and "on" (`high`).
    pub fn blynk_with_levels(
        &self,
        pin: Pin,
        duration: u64,
        invert: bool,
        low: Level,
        high: Level,
    ) -> Result<()> {
        let (turn_on, turn_off) = if invert { (low, high) } else { (high, low) };
        self.digital_write(pin, turn_on)?;
        self.delay(duration);
        self.digital_write(pin, turn_off)
    }

    // ==================== I2C ====================

    /// Run an arbitrary I2C action and return the raw body.
    pub fn i2c(&self, action: &str, fields: &[(&'static str, String)]) -> Result<String> {
        self.execute(&Requests::i2c(action, fields))
    }

    pub fn i2c_begin(&self, pins: I2cPins) -> Result<()> {
        match pins {
            I2cPins::Default => self.info("i2c begin"),
            I2cPins::Custom { sda, scl } => {
                self.info(&format!("i2c begin sda={} scl={}", sda, scl))
            }
        }
        let body = self.execute(&Requests::i2c_begin(pins))?;
        response::expect_ok("i2c begin", &body)?;
        Ok(())
    }

    pub fn i2c_set_clock(&self, clock: u32) -> Result<()> {
        self.info(&format!("i2c setClock {}", clock));
        let body = self.execute(&Requests::i2c_set_clock(clock))?;
        response::expect_ok("i2c setClock", &body)?;
        Ok(())
    }

    pub fn i2c_set_clock_stretch_limit(&self, limit: u32) -> Result<()> {
        self.info(&format!("i2c setClockStretchLimit {}", limit));
        let body = self.execute(&Requests::i2c_set_clock_stretch_limit(limit))?;
        response::expect_ok("i2c setClockStretchLimit", &body)?;
        Ok(())
    }

    /// Write `message` to the peripheral at `address` and read back
    /// `response_len` bytes, decoded one character per byte.
    pub fn i2c_ask(&self, address: u8, message: &str, response_len: usize) -> Result<String> {
        let payload = hex::str_to_bytes(message)?;
        let body = self.ask(address, &payload, response_len)?;
        Ok(response::parse_hex_text("i2c ask", &body)?)
    }

    /// Byte-oriented [`i2c_ask`](Self::i2c_ask).
    pub fn i2c_ask_bytes(
        &self,
        address: u8,
        payload: &[u8],
        response_len: usize,
    ) -> Result<Vec<u8>> {
        let body = self.ask(address, payload, response_len)?;
        Ok(response::parse_hex_bytes("i2c ask", &body)?)
    }

    fn ask(&self, address: u8, payload: &[u8], response_len: usize) -> Result<String> {
        let request = Requests::i2c_ask(address, payload, response_len);
        self.info(&format!(
            "i2c > {}, wait {} bytes",
            request.get_field("hexstring").unwrap_or_default(),
            response_len
        ));
        let body = self.execute(&request)?;
        self.info(&format!("i2c < {}", body));
        Ok(body)
    }

    pub fn i2c_flush(&self) -> Result<()> {
        self.info("i2c flush");
        let body = self.execute(&Requests::i2c_flush())?;
        response::expect_ok("i2c flush", &body)?;
        Ok(())
    }

    // ==================== Serial ====================

    /// Open the device-side UART at `baud`.
    pub fn serial_begin(&self, baud: u32) -> Result<()> {
        self.info(&format!("serial_begin baudrate={}", baud));
        self.execute(&Requests::serial_begin(baud))?;
        Ok(())
    }

    /// Discard whatever the device has buffered.
    pub fn serial_flush(&self) -> Result<()> {
        self.info("serial_flush");
        self.execute(&Requests::serial_flush())?;
        Ok(())
    }

    /// Drain the device's serial buffer once.
    pub fn serial_read(&self) -> Result<String> {
        self.info("serial_read");
        self.execute(&Requests::serial_read())
    }

    /// Poll the serial buffer until it yields data or `options.wait` elapses.
    ///
    /// Returns after the first non-empty read; data arriving later stays on
    /// the device. `None` means nothing arrived in time.
    pub fn serial_readlines(&self, options: &ReadlinesOptions) -> Result<Option<SerialOutput>> {
        self.info(&format!(
            "serial_readlines wait {} ms, delimiter={}, prefix={}",
            options.wait.as_millis(),
            options
                .delimiter
                .as_deref()
                .map(|d| d.escape_default().to_string())
                .unwrap_or_else(|| "None".to_string()),
            options.prefix.as_deref().unwrap_or("None"),
        ));

        let start = self.clock.now();
        while self.clock.now().duration_since(start) < options.wait {
            let body = self.execute(&Requests::serial_read())?;

            if !body.is_empty() {
                let output = match options.delimiter.as_deref() {
                    Some(delimiter) if !delimiter.is_empty() => SerialOutput::Lines(
                        reassemble_lines(&body, delimiter, options.prefix.as_deref()),
                    ),
                    _ => SerialOutput::Raw(body),
                };
                return Ok(Some(output));
            }

            self.clock.sleep(SERIAL_POLL_INTERVAL);
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::fake::{Bench, Event, FakeHandle};
    use crate::device::transport::HttpResponse;
    use crate::error::CoreError;
    use crate::protocol::requests::Method;
    use std::rc::Rc;

    fn client(bench: &Rc<Bench>) -> DeviceClient {
        let handle = FakeHandle(Rc::clone(bench));
        DeviceClient::with_parts(
            ClientConfig::new("192.168.3.49"),
            Box::new(handle.clone()),
            Box::new(handle.clone()),
            Box::new(handle),
        )
    }

    fn invalid_body(err: CoreError) -> String {
        match err {
            CoreError::Device(DeviceError::InvalidResponse { body, .. }) => body,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_construction_logs_target() {
        let bench = Bench::fixed(200, "OK");
        let api = client(&bench);
        assert_eq!(api.base_url(), "http://192.168.3.49:80");
        assert_eq!(bench.messages(), vec!["Testing: 192.168.3.49:80"]);
        assert!(bench.requests().is_empty());
    }

    #[test]
    fn test_ping() {
        let bench = Bench::fixed(200, "pong");
        client(&bench).ping().unwrap();
        let requests = bench.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Get);
        assert_eq!(requests[0].path, "/ping");
    }

    #[test]
    fn test_ping_rejects_other_bodies() {
        for body in ["Pong", "pong\n", "OK", ""] {
            let bench = Bench::fixed(200, body);
            let err = client(&bench).ping().unwrap_err();
            assert_eq!(invalid_body(err), body);
        }
    }

    #[test]
    fn test_version() {
        let bench = Bench::fixed(200, "0.0.1");
        assert_eq!(client(&bench).version().unwrap(), "0.0.1");

        let bench = Bench::fixed(200, "");
        assert!(client(&bench).version().is_err());
    }

    #[test]
    fn test_pin_mode() {
        let bench = Bench::fixed(200, "OK");
        client(&bench).pin_mode(14, PinMode::InputPullup).unwrap();
        assert_eq!(bench.requests()[0], Requests::pin_mode(14, PinMode::InputPullup));
        assert!(bench.messages().contains(&"set pinMode 14 INPUT_PULLUP".to_string()));

        let bench = Bench::fixed(200, "Invalid pin");
        let err = client(&bench).pin_mode(99, PinMode::Output).unwrap_err();
        assert_eq!(invalid_body(err), "Invalid pin");
    }

    #[test]
    fn test_digital_read() {
        let bench = Bench::scripted(vec!["0", "1", "2"]);
        let api = client(&bench);
        assert_eq!(api.digital_read(5).unwrap(), Level::Low);
        assert_eq!(api.digital_read(5).unwrap(), Level::High);
        assert_eq!(invalid_body(api.digital_read(5).unwrap_err()), "2");
        assert_eq!(bench.requests()[0].get_field("pin"), Some("5"));
    }

    #[test]
    fn test_digital_write() {
        let bench = Bench::fixed(200, "OK");
        client(&bench).digital_write(16, Level::High).unwrap();
        let req = &bench.requests()[0];
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.path, "/digitalWrite");
        assert_eq!(req.get_field("value"), Some("1"));
    }

    #[test]
    fn test_http_status_error_for_every_operation() {
        let bench = Bench::fixed(500, "device fault");
        let api = client(&bench);

        let results: Vec<CoreError> = vec![
            api.version().unwrap_err(),
            api.ping().unwrap_err(),
            api.pin_mode(1, PinMode::Output).unwrap_err(),
            api.digital_read(1).unwrap_err(),
            api.digital_write(1, Level::Low).unwrap_err(),
            api.i2c_begin(I2cPins::Default).unwrap_err(),
            api.i2c_set_clock(100_000).unwrap_err(),
            api.i2c_set_clock_stretch_limit(1500).unwrap_err(),
            api.i2c_ask(10, "M", 1).unwrap_err(),
            api.i2c_flush().unwrap_err(),
            api.serial_begin(115_200).unwrap_err(),
            api.serial_flush().unwrap_err(),
            api.serial_read().unwrap_err(),
            api.serial_readlines(&ReadlinesOptions::default()).unwrap_err(),
            api.wait_digital(1, Level::High, Duration::from_secs(1))
                .unwrap_err(),
        ];

        for err in results {
            assert_eq!(err.http_status(), Some((500, "device fault")));
        }
    }

    #[test]
    fn test_transport_error_propagates() {
        let bench = Bench::unreachable();
        let err = client(&bench).ping().unwrap_err();
        assert!(err.is_network());
    }

    #[test]
    fn test_delay_sleeps() {
        let bench = Bench::fixed(200, "OK");
        client(&bench).delay(250);
        assert_eq!(bench.sleeps(), vec![Duration::from_millis(250)]);
    }

    #[test]
    fn test_wait_digital_reaches_target() {
        // Button is released (HIGH) until 1 s in, then pressed.
        let bench = Bench::new(|_, now| {
            let body = if now >= Duration::from_secs(1) { "0" } else { "1" };
            Ok(HttpResponse::ok(body))
        });
        let reached = client(&bench)
            .wait_digital(14, Level::Low, Duration::from_secs(3))
            .unwrap();
        assert!(reached);
        // Reads at 0.0, 0.3, 0.6, 0.9, 1.2
        assert_eq!(bench.requests().len(), 5);
        assert_eq!(bench.elapsed(), Duration::from_millis(1200));
    }

    #[test]
    fn test_wait_digital_immediate_match_does_not_sleep() {
        let bench = Bench::fixed(200, "1");
        let reached = client(&bench)
            .wait_digital(4, Level::High, Duration::from_secs(5))
            .unwrap();
        assert!(reached);
        assert!(bench.sleeps().is_empty());
        assert_eq!(bench.requests().len(), 1);
    }

    #[test]
    fn test_wait_digital_times_out() {
        let bench = Bench::fixed(200, "1");
        let reached = client(&bench)
            .wait_digital(14, Level::Low, Duration::from_secs(3))
            .unwrap();
        assert!(!reached);
        assert!(bench.elapsed() >= Duration::from_secs(3));
        assert!(bench.sleeps().iter().all(|d| *d == WAIT_POLL_INTERVAL));
    }

    #[test]
    fn test_wait_digital_zero_timeout_never_reads() {
        let bench = Bench::fixed(200, "1");
        let reached = client(&bench)
            .wait_digital(14, Level::High, Duration::ZERO)
            .unwrap();
        assert!(!reached);
        assert!(bench.requests().is_empty());
    }

    #[test]
    fn test_blynk_inverted() {
        let bench = Bench::fixed(200, "OK");
        client(&bench).blynk(16, 100, true).unwrap();

        let events = bench.events();
        assert_eq!(
            events,
            vec![
                Event::Request(Requests::digital_write(16, Level::Low)),
                Event::Sleep(Duration::from_millis(100)),
                Event::Request(Requests::digital_write(16, Level::High)),
            ]
        );
    }

    #[test]
    fn test_blynk_normal() {
        let bench = Bench::fixed(200, "OK");
        client(&bench).blynk(2, 1000, false).unwrap();
        let requests = bench.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].get_field("value"), Some("1"));
        assert_eq!(requests[1].get_field("value"), Some("0"));
        assert_eq!(bench.sleeps(), vec![Duration::from_millis(1000)]);
    }

    #[test]
    fn test_blynk_stops_on_failed_write() {
        let bench = Bench::fixed(200, "ERR");
        assert!(client(&bench).blynk(2, 100, false).is_err());
        assert_eq!(bench.requests().len(), 1);
        assert!(bench.sleeps().is_empty());
    }

    #[test]
    fn test_i2c_begin() {
        let bench = Bench::fixed(200, "OK");
        let api = client(&bench);
        api.i2c_begin(I2cPins::Default).unwrap();
        api.i2c_begin(I2cPins::Custom { sda: 0, scl: 2 }).unwrap();

        let requests = bench.requests();
        assert_eq!(requests[0].fields.len(), 1);
        assert_eq!(requests[1].get_field("sda_pin"), Some("0"));
        assert_eq!(requests[1].get_field("scl_pin"), Some("2"));
    }

    #[test]
    fn test_i2c_config_calls() {
        let bench = Bench::fixed(200, "OK");
        let api = client(&bench);
        api.i2c_set_clock(100_000).unwrap();
        api.i2c_set_clock_stretch_limit(1500).unwrap();
        api.i2c_flush().unwrap();

        let actions: Vec<_> = bench
            .requests()
            .iter()
            .map(|r| r.get_field("action").unwrap_or_default().to_string())
            .collect();
        assert_eq!(actions, vec!["setClock", "setClockStretchLimit", "flush"]);

        let bench = Bench::fixed(200, "FAIL");
        assert!(client(&bench).i2c_flush().is_err());
    }

    #[test]
    fn test_i2c_ask() {
        let bench = Bench::fixed(200, "4F4B");
        let answer = client(&bench).i2c_ask(10, "B", 2).unwrap();
        assert_eq!(answer, "OK");

        let req = &bench.requests()[0];
        assert_eq!(req.get_field("action"), Some("ask"));
        assert_eq!(req.get_field("address"), Some("10"));
        assert_eq!(req.get_field("hexstring"), Some("42"));
        assert_eq!(req.get_field("response"), Some("2"));
        assert!(bench.messages().contains(&"i2c > 42, wait 2 bytes".to_string()));
        assert!(bench.messages().contains(&"i2c < 4F4B".to_string()));
    }

    #[test]
    fn test_i2c_ask_bad_hex_body() {
        let bench = Bench::fixed(200, "not hex");
        let err = client(&bench).i2c_ask(10, "M", 1).unwrap_err();
        assert_eq!(invalid_body(err), "not hex");
    }

    #[test]
    fn test_i2c_ask_unencodable_message() {
        let bench = Bench::fixed(200, "00");
        let err = client(&bench).i2c_ask(10, "Ω", 1).unwrap_err();
        assert!(matches!(err, CoreError::Encoding(_)));
        assert!(bench.requests().is_empty());
    }

    #[test]
    fn test_i2c_ask_bytes() {
        let bench = Bench::fixed(200, "01FA0002");
        let answer = client(&bench).i2c_ask_bytes(0x3C, &[0x00, 0xFF], 4).unwrap();
        assert_eq!(answer, vec![0x01, 0xFA, 0x00, 0x02]);
        assert_eq!(bench.requests()[0].get_field("hexstring"), Some("00FF"));
    }

    #[test]
    fn test_generic_i2c_returns_body() {
        let bench = Bench::fixed(200, "done");
        let body = client(&bench)
            .i2c("scan", &[("from", "8".to_string())])
            .unwrap();
        assert_eq!(body, "done");
        assert_eq!(bench.requests()[0].get_field("from"), Some("8"));
    }

    #[test]
    fn test_serial_begin_and_flush_accept_any_body() {
        let bench = Bench::fixed(200, "whatever");
        let api = client(&bench);
        api.serial_begin(9600).unwrap();
        api.serial_flush().unwrap();
        let requests = bench.requests();
        assert_eq!(requests[0].get_field("baudrate"), Some("9600"));
        assert_eq!(requests[1].get_field("flush"), Some("1"));
    }

    #[test]
    fn test_serial_read() {
        let bench = Bench::fixed(200, "boot ok\r\n");
        assert_eq!(client(&bench).serial_read().unwrap(), "boot ok\r\n");
    }

    #[test]
    fn test_serial_readlines_merges_continuations() {
        let bench = Bench::fixed(200, "00:hello\n01xworld\n");
        let out = client(&bench)
            .serial_readlines(&ReadlinesOptions::default())
            .unwrap();
        assert_eq!(
            out,
            Some(SerialOutput::Lines(vec!["00:hello01xworld".to_string()]))
        );
    }

    #[test]
    fn test_serial_readlines_returns_after_first_chunk() {
        let bench = Bench::scripted(vec!["", "", "00:a\n00:b", "00:c"]);
        let out = client(&bench)
            .serial_readlines(&ReadlinesOptions::default())
            .unwrap();
        assert_eq!(
            out,
            Some(SerialOutput::Lines(vec![
                "00:a".to_string(),
                "00:b".to_string()
            ]))
        );
        assert_eq!(bench.requests().len(), 3);
        assert_eq!(bench.sleeps(), vec![SERIAL_POLL_INTERVAL; 2]);
    }

    #[test]
    fn test_serial_readlines_raw_without_delimiter() {
        let bench = Bench::fixed(200, "00:x\n01y");
        let options = ReadlinesOptions {
            delimiter: None,
            ..ReadlinesOptions::default()
        };
        let out = client(&bench).serial_readlines(&options).unwrap();
        assert_eq!(out, Some(SerialOutput::Raw("00:x\n01y".to_string())));
    }

    #[test]
    fn test_serial_readlines_times_out() {
        let bench = Bench::fixed(200, "");
        let options = ReadlinesOptions {
            wait: Duration::from_millis(2000),
            ..ReadlinesOptions::default()
        };
        let out = client(&bench).serial_readlines(&options).unwrap();
        assert_eq!(out, None);
        // Polls at 0.0, 0.5, 1.0, 1.5
        assert_eq!(bench.requests().len(), 4);
    }

    #[test]
    fn test_serial_readlines_log_escapes_delimiter() {
        let bench = Bench::fixed(200, "x");
        client(&bench)
            .serial_readlines(&ReadlinesOptions::default())
            .unwrap();
        assert!(bench
            .messages()
            .contains(&"serial_readlines wait 5000 ms, delimiter=\\n, prefix=00:".to_string()));
    }
}
