//! Connection settings for a single device.

use std::time::Duration;

/// Default HTTP port of the METF firmware.
pub const DEFAULT_PORT: u16 = 80;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Where the device lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub host: String,
    pub port: u16,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Root URL every endpoint path is appended to.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
