//! Output formatting for CLI results.

pub mod json;
pub mod table;

pub use json::JsonOutput;
pub use table::TableOutput;

use metf_core::{Board, SerialOutput};
use serde_json::Value;

/// Output formatter trait
pub trait OutputFormatter {
    /// Format an operation that only acknowledges
    fn format_ack(&self, host: &str, operation: &str) -> String;

    /// Format an operation that returns a value
    fn format_value(&self, host: &str, operation: &str, value: &Value) -> String;

    /// Format drained serial output; `None` means nothing arrived
    fn format_serial(&self, host: &str, output: Option<&SerialOutput>) -> String;

    /// Format a board pin table
    fn format_pins(&self, board: Board) -> String;

    /// Format an error
    fn format_error(&self, error: &str) -> String;
}

/// Get the appropriate formatter based on JSON flag
pub fn get_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonOutput::new())
    } else {
        Box::new(TableOutput::new())
    }
}
