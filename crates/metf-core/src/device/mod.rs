//! Device communication layer.
//!
//! Provides the blocking device client and the seams it is built on:
//! transport, clock and log observer.

pub mod client;
pub mod clock;
pub mod observer;
pub mod transport;

#[cfg(test)]
pub(crate) mod fake;

pub use client::DeviceClient;
pub use clock::{Clock, SystemClock};
pub use observer::{ClientObserver, LogObserver, NoopObserver};
pub use transport::{HttpResponse, HttpTransport, Transport};
