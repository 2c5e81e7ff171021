//! HTTP transport to the device.

use reqwest::blocking::Client;

use crate::config::ClientConfig;
use crate::error::{CoreError, DeviceError};
use crate::protocol::requests::{Method, Request};

/// Status and body of a device response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns whatever the device answered.
///
/// Implementations report connection failures as errors but hand back
/// non-success statuses untouched; status checking belongs to the client.
pub trait Transport {
    fn send(&self, request: &Request) -> Result<HttpResponse, CoreError>;
}

/// Blocking `reqwest` transport bound to one device.
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, CoreError> {
        // Boards sit on the local network, never behind a proxy
        let client = Client::builder()
            .timeout(config.timeout)
            .no_proxy()
            .build()
            .map_err(|e| CoreError::Other(format!("HTTP client error: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &Request) -> Result<HttpResponse, CoreError> {
        let url = format!("{}{}", self.base_url, request.path);

        let builder = match request.method {
            Method::Get if request.fields.is_empty() => self.client.get(&url),
            Method::Get => self.client.get(&url).query(&request.fields),
            Method::Post => self.client.post(&url).form(&request.fields),
        };

        let response = builder.send().map_err(|e| request_error(&url, e))?;
        let status = response.status().as_u16();
        let body = response.text().map_err(|e| request_error(&url, e))?;

        Ok(HttpResponse { status, body })
    }
}

fn request_error(url: &str, e: reqwest::Error) -> CoreError {
    if e.is_timeout() {
        CoreError::Device(DeviceError::Timeout {
            url: url.to_string(),
        })
    } else {
        CoreError::Device(DeviceError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}
