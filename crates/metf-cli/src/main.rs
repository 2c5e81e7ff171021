//! METF CLI - command-line front end for METF test boards.
//!
//! Every subcommand maps to one client operation, so hardware checks can be
//! scripted from a shell or CI job.

mod cli;
mod commands;
mod error;
mod logging;
mod output;

use clap::Parser;

use cli::{Cli, Commands};
use error::{exit_codes, CliError};
use metf_core::Board;
use output::get_formatter;

fn main() {
    let cli = Cli::parse();
    let formatter = get_formatter(cli.json);

    let result = logging::init(cli.verbose, cli.file_logging_enabled()).and_then(|log_path| {
        if let Some(path) = log_path {
            log::info!("Logging to {}", path.display());
        }
        run(cli)
    });

    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("{}", formatter.format_error(&e.to_string()));
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let formatter = get_formatter(cli.json);
    let formatter = formatter.as_ref();
    let board = cli.board.map(Board::from);

    if let Commands::Pins = cli.command {
        return commands::run_pins(board, formatter);
    }

    let client = commands::connect(cli.host.as_deref(), cli.port, cli.timeout)?;

    match cli.command {
        Commands::Version => commands::run_version(&client, formatter),
        Commands::Ping => commands::run_ping(&client, formatter),
        Commands::PinMode(args) => commands::run_pin_mode(&client, args, board, formatter),
        Commands::Read(args) => commands::run_read(&client, args, board, formatter),
        Commands::Write(args) => commands::run_write(&client, args, board, formatter),
        Commands::Wait(args) => commands::run_wait(&client, args, board, formatter),
        Commands::Blink(args) => commands::run_blink(&client, args, board, formatter),
        Commands::I2c(args) => commands::run_i2c(&client, args, board, formatter),
        Commands::Serial(args) => commands::run_serial(&client, args, formatter),
        Commands::Pins => commands::run_pins(board, formatter),
    }
}
