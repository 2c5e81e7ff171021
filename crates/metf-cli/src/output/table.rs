//! Table-formatted output for CLI.

use colored::*;
use comfy_table::{Cell, ContentArrangement, Table};
use serde_json::Value;

use metf_core::{Board, SerialOutput};

use super::OutputFormatter;

pub struct TableOutput;

impl TableOutput {
    pub fn new() -> Self {
        Self
    }

    fn status_line(host: &str, operation: &str) -> String {
        format!("{} {} {}", "[OK]".green(), host, operation)
    }

    fn value_text(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            Value::Bool(true) => "yes".to_string(),
            Value::Bool(false) => "no".to_string(),
            other => other.to_string(),
        }
    }
}

impl Default for TableOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TableOutput {
    fn format_ack(&self, host: &str, operation: &str) -> String {
        Self::status_line(host, operation)
    }

    fn format_value(&self, host: &str, operation: &str, value: &Value) -> String {
        format!(
            "{}\n{}",
            Self::status_line(host, operation),
            Self::value_text(value)
        )
    }

    fn format_serial(&self, host: &str, output: Option<&SerialOutput>) -> String {
        match output {
            None => format!("{} {} no serial output", "[--]".yellow(), host),
            Some(SerialOutput::Raw(text)) => {
                format!("{}\n{}", Self::status_line(host, "serial lines"), text)
            }
            Some(SerialOutput::Lines(lines)) => {
                let mut table = Table::new();
                table.set_content_arrangement(ContentArrangement::Dynamic);
                table.set_header(vec!["#", "Line"]);

                for (i, line) in lines.iter().enumerate() {
                    table.add_row(vec![Cell::new(i + 1), Cell::new(line)]);
                }

                format!(
                    "{}\n{}\n\n{} line(s)",
                    Self::status_line(host, "serial lines"),
                    table,
                    lines.len()
                )
            }
        }
    }

    fn format_pins(&self, board: Board) -> String {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Name", "GPIO"]);

        for (name, pin) in board.pins() {
            table.add_row(vec![Cell::new(name), Cell::new(pin)]);
        }

        format!("{}\n{}", board.display_name().bold(), table)
    }

    fn format_error(&self, error: &str) -> String {
        format!("{} {}", "Error:".red(), error)
    }
}
