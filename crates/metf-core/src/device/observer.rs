//! Log sink for client activity.
//!
//! The client reports every operation to a [`ClientObserver`] handed to it at
//! construction instead of writing to a process-wide logger directly.

use log::Level;

/// Log target used by [`LogObserver`].
pub const LOG_TARGET: &str = "metf";

/// Receives one record per client operation.
pub trait ClientObserver {
    fn record(&self, level: Level, message: &str);
}

/// Forwards records to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl ClientObserver for LogObserver {
    fn record(&self, level: Level, message: &str) {
        log::log!(target: LOG_TARGET, level, "{}", message);
    }
}

/// Discards every record.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ClientObserver for NoopObserver {
    fn record(&self, _level: Level, _message: &str) {}
}
