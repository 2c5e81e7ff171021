//! JSON-formatted output for CLI.

use serde::Serialize;
use serde_json::{json, Value};

use metf_core::{Board, SerialOutput};

use super::OutputFormatter;

pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }

    fn to_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JsonOutput {
    fn format_ack(&self, host: &str, operation: &str) -> String {
        Self::to_json(&json!({
            "host": host,
            "operation": operation,
            "success": true
        }))
    }

    fn format_value(&self, host: &str, operation: &str, value: &Value) -> String {
        Self::to_json(&json!({
            "host": host,
            "operation": operation,
            "success": true,
            "result": value
        }))
    }

    fn format_serial(&self, host: &str, output: Option<&SerialOutput>) -> String {
        let result = match output {
            Some(SerialOutput::Lines(lines)) => json!(lines),
            Some(SerialOutput::Raw(text)) => json!(text),
            None => Value::Null,
        };

        Self::to_json(&json!({
            "host": host,
            "operation": "serial lines",
            "success": true,
            "result": result
        }))
    }

    fn format_pins(&self, board: Board) -> String {
        let pins: serde_json::Map<String, Value> = board
            .pins()
            .iter()
            .map(|(name, pin)| (name.to_string(), json!(pin)))
            .collect();

        Self::to_json(&json!({
            "board": board,
            "pins": pins
        }))
    }

    fn format_error(&self, error: &str) -> String {
        Self::to_json(&json!({
            "success": false,
            "error": error
        }))
    }
}
