//! Process-wide logging setup.
//!
//! Log records go to stderr and, when file logging is enabled, to a file
//! named after the UTC start time under `logs/`.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, Utc};
use log::LevelFilter;

use crate::error::CliError;

/// Directory log files are written to, relative to the working directory.
pub const LOG_DIR: &str = "logs";

/// File name for a log started at `started`, e.g. `2026.10.18_09.05_UTC.log`.
pub fn log_file_name(started: DateTime<Utc>) -> String {
    started.format("%Y.%m.%d_%H.%M_UTC.log").to_string()
}

/// Create `dir` if needed and open a fresh log file inside it.
pub fn create_log_file(dir: &Path, started: DateTime<Utc>) -> io::Result<(PathBuf, File)> {
    fs::create_dir_all(dir)?;
    let path = dir.join(log_file_name(started));
    let file = File::create(&path)?;
    Ok((path, file))
}

/// Writes everything to stderr and, if present, to a file.
pub struct Tee {
    file: Option<File>,
}

impl Tee {
    pub fn new(file: Option<File>) -> Self {
        Self { file }
    }
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        if let Some(file) = self.file.as_mut() {
            file.write_all(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        if let Some(file) = self.file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }
}

/// Install the global logger. `RUST_LOG` overrides the level chosen here.
///
/// Returns the path of the log file when file logging is on.
pub fn init(verbose: bool, file_logging: bool) -> Result<Option<PathBuf>, CliError> {
    let (path, file) = if file_logging {
        let (path, file) = create_log_file(Path::new(LOG_DIR), Utc::now())?;
        (Some(path), Some(file))
    } else {
        (None, None)
    };

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(Tee::new(file))))
        .try_init()
        .map_err(|e| CliError::Other(format!("Logger setup failed: {}", e)))?;

    Ok(path)
}
