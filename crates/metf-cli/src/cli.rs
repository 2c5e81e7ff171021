//! CLI argument definitions using clap.

use std::ffi::OsStr;

use clap::{Args, Parser, Subcommand, ValueEnum};

use metf_core::{Board, Level, PinMode, DEFAULT_BAUD_RATE};

/// METF CLI - drive GPIO, I2C and serial on a METF test board over HTTP
#[derive(Parser, Debug)]
#[command(name = "metf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Device host name or IP address
    #[arg(long, global = true, env = "METF_HOST")]
    pub host: Option<String>,

    /// Device HTTP port
    #[arg(long, global = true, default_value = "80", env = "METF_PORT")]
    pub port: u16,

    /// Request timeout in milliseconds
    #[arg(long, global = true, default_value = "3000", env = "METF_TIMEOUT")]
    pub timeout: u64,

    /// Board pin map, enables pin names such as D5 or LED_BUILTIN
    #[arg(long, global = true, value_enum)]
    pub board: Option<BoardArg>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write the log to logs/<timestamp>_UTC.log (or set ETF_FILE_LOGGING)
    #[arg(long, global = true)]
    pub file_logging: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Any non-empty value turns file logging on, "0" and "false" included.
pub const FILE_LOGGING_ENV: &str = "ETF_FILE_LOGGING";

impl Cli {
    pub fn file_logging_enabled(&self) -> bool {
        self.file_logging || env_flag_set(std::env::var_os(FILE_LOGGING_ENV).as_deref())
    }
}

fn env_flag_set(value: Option<&OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the firmware version
    Version,

    /// Check that the device answers
    Ping,

    /// Configure a pin as input, pulled-up input or output
    PinMode(PinModeArgs),

    /// Read a digital pin
    Read(PinArgs),

    /// Write a digital pin
    Write(WriteArgs),

    /// Wait for a digital pin to reach a level
    Wait(WaitArgs),

    /// Pulse a pin on, then off
    Blink(BlinkArgs),

    /// I2C bus operations
    I2c(I2cArgs),

    /// Device serial port operations
    Serial(SerialArgs),

    /// List the pin names of the selected board
    Pins,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardArg {
    Nodemcu,
    Esp32c6,
}

impl From<BoardArg> for Board {
    fn from(arg: BoardArg) -> Self {
        match arg {
            BoardArg::Nodemcu => Board::NodeMcu,
            BoardArg::Esp32c6 => Board::Esp32C6SuperMini,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeArg {
    Input,
    InputPullup,
    Output,
}

impl From<ModeArg> for PinMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Input => PinMode::Input,
            ModeArg::InputPullup => PinMode::InputPullup,
            ModeArg::Output => PinMode::Output,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelArg {
    Low,
    High,
}

impl From<LevelArg> for Level {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Low => Level::Low,
            LevelArg::High => Level::High,
        }
    }
}

// ==================== GPIO ====================

#[derive(Args, Debug)]
pub struct PinArgs {
    /// Pin number, or pin name when --board is given
    pub pin: String,
}

#[derive(Args, Debug)]
pub struct PinModeArgs {
    /// Pin number, or pin name when --board is given
    pub pin: String,

    #[arg(value_enum)]
    pub mode: ModeArg,
}

#[derive(Args, Debug)]
pub struct WriteArgs {
    /// Pin number, or pin name when --board is given
    pub pin: String,

    #[arg(value_enum)]
    pub level: LevelArg,
}

#[derive(Args, Debug)]
pub struct WaitArgs {
    /// Pin number, or pin name when --board is given
    pub pin: String,

    /// Level to wait for
    #[arg(value_enum)]
    pub level: LevelArg,

    /// Give up after this many seconds
    #[arg(long, default_value = "5.0")]
    pub within: f64,
}

#[derive(Args, Debug)]
pub struct BlinkArgs {
    /// Pin number, or pin name when --board is given
    pub pin: String,

    /// Time the pin stays on, in milliseconds
    #[arg(short, long, default_value = "1000")]
    pub duration: u64,

    /// The load is active-low (on = LOW)
    #[arg(long)]
    pub invert: bool,
}

// ==================== I2C ====================

#[derive(Args, Debug)]
pub struct I2cArgs {
    #[command(subcommand)]
    pub command: I2cCommands,
}

#[derive(Subcommand, Debug)]
pub enum I2cCommands {
    /// Start the I2C bus, on default or explicit pins
    Begin(I2cBeginArgs),

    /// Set the bus clock in Hz
    Clock {
        hz: u32,
    },

    /// Set the clock stretch limit
    Stretch {
        limit: u32,
    },

    /// Write a message to a peripheral and read its answer
    Ask(I2cAskArgs),

    /// Flush the I2C buffers
    Flush,
}

#[derive(Args, Debug)]
pub struct I2cBeginArgs {
    /// SDA pin
    #[arg(long, requires = "scl")]
    pub sda: Option<String>,

    /// SCL pin
    #[arg(long, requires = "sda")]
    pub scl: Option<String>,
}

#[derive(Args, Debug)]
pub struct I2cAskArgs {
    /// 7-bit peripheral address, decimal or 0x-prefixed hex
    #[arg(value_parser = parse_address)]
    pub address: u8,

    /// Message to send
    pub message: String,

    /// Number of bytes to read back
    pub length: usize,

    /// Treat the message as hex bytes and print the answer as hex
    #[arg(long)]
    pub hex: bool,
}

/// Parse an I2C address given as `10` or `0x0A`.
pub fn parse_address(s: &str) -> Result<u8, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse::<u8>(),
    };
    match parsed {
        Ok(addr) if addr <= 0x7F => Ok(addr),
        Ok(addr) => Err(format!("address {} is outside the 7-bit range", addr)),
        Err(e) => Err(format!("invalid address '{}': {}", s, e)),
    }
}

// ==================== Serial ====================

#[derive(Args, Debug)]
pub struct SerialArgs {
    #[command(subcommand)]
    pub command: SerialCommands,
}

#[derive(Subcommand, Debug)]
pub enum SerialCommands {
    /// Open the device UART
    Begin {
        #[arg(long, default_value_t = DEFAULT_BAUD_RATE)]
        baud: u32,
    },

    /// Drop buffered serial data
    Flush,

    /// Read buffered serial data once
    Read,

    /// Wait for serial output and split it into lines
    Lines(SerialLinesArgs),
}

#[derive(Args, Debug)]
pub struct SerialLinesArgs {
    /// How long to wait for output, in milliseconds
    #[arg(long, default_value = "5000")]
    pub wait: u64,

    /// Line delimiter; escapes \n, \r and \t are understood
    #[arg(long, default_value = "\\n", conflicts_with = "no_delimiter")]
    pub delimiter: String,

    /// Prefix that starts a new line; other segments continue the previous one
    #[arg(long, default_value = "00:", conflicts_with = "no_prefix")]
    pub prefix: String,

    /// Return the raw text instead of lines
    #[arg(long)]
    pub no_delimiter: bool,

    /// Never merge segments
    #[arg(long)]
    pub no_prefix: bool,
}

/// Expand `\n`, `\r`, `\t` and `\\` in a delimiter typed on the command line.
pub fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
