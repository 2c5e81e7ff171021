//! I2C commands.

use serde_json::json;

use metf_core::protocol::hex;
use metf_core::{Board, DeviceClient, I2cPins};

use super::resolve_pin;
use crate::cli::{I2cArgs, I2cAskArgs, I2cCommands};
use crate::error::CliError;
use crate::output::OutputFormatter;

pub fn run_i2c(
    client: &DeviceClient,
    args: I2cArgs,
    board: Option<Board>,
    formatter: &dyn OutputFormatter,
) -> Result<(), CliError> {
    let host = client.config().host.as_str();

    match args.command {
        I2cCommands::Begin(begin) => {
            let pins = match (begin.sda, begin.scl) {
                (Some(sda), Some(scl)) => I2cPins::Custom {
                    sda: resolve_pin(&sda, board)?,
                    scl: resolve_pin(&scl, board)?,
                },
                _ => I2cPins::Default,
            };
            client.i2c_begin(pins)?;
            println!("{}", formatter.format_ack(host, "i2c begin"));
        }
        I2cCommands::Clock { hz } => {
            client.i2c_set_clock(hz)?;
            println!("{}", formatter.format_ack(host, &format!("i2c setClock {}", hz)));
        }
        I2cCommands::Stretch { limit } => {
            client.i2c_set_clock_stretch_limit(limit)?;
            println!(
                "{}",
                formatter.format_ack(host, &format!("i2c setClockStretchLimit {}", limit))
            );
        }
        I2cCommands::Ask(ask) => run_ask(client, ask, formatter)?,
        I2cCommands::Flush => {
            client.i2c_flush()?;
            println!("{}", formatter.format_ack(host, "i2c flush"));
        }
    }

    Ok(())
}

fn run_ask(
    client: &DeviceClient,
    args: I2cAskArgs,
    formatter: &dyn OutputFormatter,
) -> Result<(), CliError> {
    let operation = format!("i2c ask 0x{:02X}", args.address);

    let answer = if args.hex {
        let payload = hex::hex_to_bytes(&args.message)
            .map_err(|e| CliError::InvalidArgument(format!("Bad hex message: {}", e)))?;
        let bytes = client.i2c_ask_bytes(args.address, &payload, args.length)?;
        hex::bytes_to_hex(&bytes)
    } else {
        client.i2c_ask(args.address, &args.message, args.length)?
    };

    println!(
        "{}",
        formatter.format_value(&client.config().host, &operation, &json!(answer))
    );
    Ok(())
}
