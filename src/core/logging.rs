//! Logger setup
//!
//! Every record goes to the combined log file and error records also go to
//! the error log file. Outside production each line is mirrored to stderr.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use chrono::Local;
use log::Level;

use super::config::{Config, DEFAULT_ERROR_LOG_FILE, DEFAULT_LOG_FILE, DEFAULT_LOG_LEVEL};

/// Writes every formatted record to the combined file and, optionally, to stderr.
struct TeeWriter {
    file: Option<File>,
    console: bool,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Some(file) = self.file.as_mut() {
            file.write_all(buf)?;
        }
        if self.console {
            // Console output is best-effort.
            let _ = io::stderr().write_all(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(file) = self.file.as_mut() {
            file.flush()?;
        }
        if self.console {
            let _ = io::stderr().flush();
        }
        Ok(())
    }
}

/// Where log lines end up, plus any file that could not be opened.
struct LogTargets {
    combined: TeeWriter,
    errors: Option<Arc<Mutex<File>>>,
    failures: Vec<anyhow::Error>,
}

impl LogTargets {
    /// Open both log files. A combined file that cannot be opened forces
    /// console output so records are never silently lost.
    fn open(log_file: &str, error_log_file: &str, console: bool) -> Self {
        let mut failures = Vec::new();

        let file = match open_log_file(log_file) {
            Ok(file) => Some(file),
            Err(e) => {
                failures.push(e);
                None
            }
        };
        let errors = match open_log_file(error_log_file) {
            Ok(file) => Some(Arc::new(Mutex::new(file))),
            Err(e) => {
                failures.push(e);
                None
            }
        };

        LogTargets {
            combined: TeeWriter {
                console: console || file.is_none(),
                file,
            },
            errors,
            failures,
        }
    }

    /// Targets used before configuration is available: default files, console on
    fn fallback(log_file: &str, error_log_file: &str) -> Self {
        Self::open(log_file, error_log_file, true)
    }

    fn for_config(config: &Config) -> Self {
        Self::open(
            &config.log_file,
            &config.error_log_file,
            !config.is_production(),
        )
    }
}

fn open_log_file(path: &str) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {path}"))
}

/// Append `line` to the error log if the record is error level.
fn write_error_line(errors: Option<&Mutex<File>>, level: Level, line: &str) {
    if level != Level::Error {
        return;
    }
    if let Some(errors) = errors {
        if let Ok(mut file) = errors.lock() {
            let _ = file.write_all(line.as_bytes());
        }
    }
}

fn install(log_level: &str, targets: LogTargets) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level));

    let LogTargets {
        combined,
        errors,
        failures,
    } = targets;

    builder.format(move |buf, record| {
        let line = format!(
            "{} [{}] {}: {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        );
        write_error_line(errors.as_deref(), record.level(), &line);
        buf.write_all(line.as_bytes())
    });
    builder.target(env_logger::Target::Pipe(Box::new(combined)));

    builder
        .try_init()
        .context("A global logger is already installed")?;

    for e in failures {
        log::error!("{e:#}; continuing without it");
    }

    Ok(())
}

/// Install the global logger. Must be called once, before any logging.
pub fn init(config: &Config) -> Result<()> {
    install(&config.log_level, LogTargets::for_config(config))
}

/// Install a logger with default settings, for failures that happen before
/// configuration is available.
pub fn init_fallback() -> Result<()> {
    install(
        DEFAULT_LOG_LEVEL,
        LogTargets::fallback(DEFAULT_LOG_FILE, DEFAULT_ERROR_LOG_FILE),
    )
}
