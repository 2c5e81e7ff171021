//! Serial port commands.

use std::time::Duration;

use serde_json::json;

use metf_core::{DeviceClient, ReadlinesOptions};

use crate::cli::{unescape, SerialArgs, SerialCommands, SerialLinesArgs};
use crate::error::CliError;
use crate::output::OutputFormatter;

pub fn run_serial(
    client: &DeviceClient,
    args: SerialArgs,
    formatter: &dyn OutputFormatter,
) -> Result<(), CliError> {
    let host = client.config().host.as_str();

    match args.command {
        SerialCommands::Begin { baud } => {
            client.serial_begin(baud)?;
            println!(
                "{}",
                formatter.format_ack(host, &format!("serial begin {}", baud))
            );
        }
        SerialCommands::Flush => {
            client.serial_flush()?;
            println!("{}", formatter.format_ack(host, "serial flush"));
        }
        SerialCommands::Read => {
            let text = client.serial_read()?;
            println!("{}", formatter.format_value(host, "serial read", &json!(text)));
        }
        SerialCommands::Lines(lines) => {
            let options = readlines_options(&lines);
            let output = client.serial_readlines(&options)?;
            println!("{}", formatter.format_serial(host, output.as_ref()));
        }
    }

    Ok(())
}

fn readlines_options(args: &SerialLinesArgs) -> ReadlinesOptions {
    ReadlinesOptions {
        wait: Duration::from_millis(args.wait),
        delimiter: (!args.no_delimiter).then(|| unescape(&args.delimiter)),
        prefix: (!args.no_prefix).then(|| args.prefix.clone()),
    }
}
