//! Version, ping and pin map commands.

use serde_json::json;

use metf_core::{Board, DeviceClient};

use crate::error::CliError;
use crate::output::OutputFormatter;

pub fn run_version(client: &DeviceClient, formatter: &dyn OutputFormatter) -> Result<(), CliError> {
    let version = client.version()?;
    println!(
        "{}",
        formatter.format_value(&client.config().host, "version", &json!(version))
    );
    Ok(())
}

pub fn run_ping(client: &DeviceClient, formatter: &dyn OutputFormatter) -> Result<(), CliError> {
    client.ping()?;
    println!("{}", formatter.format_ack(&client.config().host, "ping"));
    Ok(())
}

/// Print one board's pin table, or every board's when none is selected.
pub fn run_pins(board: Option<Board>, formatter: &dyn OutputFormatter) -> Result<(), CliError> {
    let boards = match board {
        Some(board) => vec![board],
        None => Board::ALL.to_vec(),
    };

    let tables: Vec<String> = boards.into_iter().map(|b| formatter.format_pins(b)).collect();
    println!("{}", tables.join("\n\n"));
    Ok(())
}
