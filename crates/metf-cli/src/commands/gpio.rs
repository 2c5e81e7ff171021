//! Digital pin commands.

use std::time::{Duration, Instant};

use serde_json::json;

use metf_core::{Board, DeviceClient, Level, PinMode};

use super::resolve_pin;
use crate::cli::{BlinkArgs, PinArgs, PinModeArgs, WaitArgs, WriteArgs};
use crate::error::CliError;
use crate::output::OutputFormatter;

pub fn run_pin_mode(
    client: &DeviceClient,
    args: PinModeArgs,
    board: Option<Board>,
    formatter: &dyn OutputFormatter,
) -> Result<(), CliError> {
    let pin = resolve_pin(&args.pin, board)?;
    let mode = PinMode::from(args.mode);
    client.pin_mode(pin, mode)?;
    println!(
        "{}",
        formatter.format_ack(&client.config().host, &format!("pinMode {} {}", pin, mode))
    );
    Ok(())
}

pub fn run_read(
    client: &DeviceClient,
    args: PinArgs,
    board: Option<Board>,
    formatter: &dyn OutputFormatter,
) -> Result<(), CliError> {
    let pin = resolve_pin(&args.pin, board)?;
    let level = client.digital_read(pin)?;
    println!(
        "{}",
        formatter.format_value(
            &client.config().host,
            &format!("digitalRead {}", pin),
            &json!(level.wire_value())
        )
    );
    Ok(())
}

pub fn run_write(
    client: &DeviceClient,
    args: WriteArgs,
    board: Option<Board>,
    formatter: &dyn OutputFormatter,
) -> Result<(), CliError> {
    let pin = resolve_pin(&args.pin, board)?;
    let level = Level::from(args.level);
    client.digital_write(pin, level)?;
    println!(
        "{}",
        formatter.format_ack(
            &client.config().host,
            &format!("digitalWrite {} {}", pin, level)
        )
    );
    Ok(())
}

/// Wait for a level; exits with CONDITION_NOT_MET when it never shows up.
pub fn run_wait(
    client: &DeviceClient,
    args: WaitArgs,
    board: Option<Board>,
    formatter: &dyn OutputFormatter,
) -> Result<(), CliError> {
    let timeout = Duration::try_from_secs_f64(args.within).map_err(|e| {
        CliError::InvalidArgument(format!("--within {}: {}", args.within, e))
    })?;

    let pin = resolve_pin(&args.pin, board)?;
    let level = Level::from(args.level);

    let started = Instant::now();
    let reached = client.wait_digital(pin, level, timeout)?;
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if !reached {
        return Err(CliError::ConditionNotMet(format!(
            "pin {} did not reach {} within {:.1} s",
            pin, level, args.within
        )));
    }

    println!(
        "{}",
        formatter.format_value(
            &client.config().host,
            &format!("wait {} {}", pin, level),
            &json!({ "reached": true, "elapsedMs": elapsed_ms })
        )
    );
    Ok(())
}

pub fn run_blink(
    client: &DeviceClient,
    args: BlinkArgs,
    board: Option<Board>,
    formatter: &dyn OutputFormatter,
) -> Result<(), CliError> {
    let pin = resolve_pin(&args.pin, board)?;
    client.blynk(pin, args.duration, args.invert)?;
    println!(
        "{}",
        formatter.format_ack(
            &client.config().host,
            &format!("blink {} {} ms", pin, args.duration)
        )
    );
    Ok(())
}
