//! Process-wide logger behind the `log` facade.
//!
//! Info and debug records go to stdout, warnings and errors to stderr.
//! With `--logfile`, every emitted record is also appended to that file with
//! ANSI escapes removed.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::CliError;

pub(crate) struct CliLogger {
    level: LevelFilter,
    timestamps: bool,
    logfile: Option<Mutex<File>>,
}

impl CliLogger {
    pub(crate) fn new(quiet: bool, verbose: bool, logfile: Option<File>) -> Self {
        let level = if verbose {
            LevelFilter::Debug
        } else if quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        };
        Self {
            level,
            timestamps: verbose,
            logfile: logfile.map(Mutex::new),
        }
    }

    pub(crate) fn level(&self) -> LevelFilter {
        self.level
    }

    /// The line written for a record, before ANSI stripping.
    pub(crate) fn format(&self, record: &Record) -> String {
        if self.timestamps {
            format!(
                "{} {:<5} {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        } else {
            record.args().to_string()
        }
    }
}

impl Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        // Only our own crates; rusqlite and friends stay quiet.
        metadata.level() <= self.level && metadata.target().starts_with("beydb")
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format(record);
        match record.level() {
            Level::Error | Level::Warn => eprintln!("{line}"),
            _ => println!("{line}"),
        }
        if let Some(file) = &self.logfile
            && let Ok(mut f) = file.lock()
        {
            let _ = writeln!(f, "{}", strip_ansi_escapes::strip_str(&line));
        }
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
        if let Some(file) = &self.logfile
            && let Ok(mut f) = file.lock()
        {
            let _ = f.flush();
        }
    }
}

/// Install the logger. Call once, before anything logs.
pub fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let file = match logfile {
        Some(path) => Some(
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    CliError::config(format!("Cannot open log file {}: {}", path.display(), e))
                })?,
        ),
        None => None,
    };
    let logger = CliLogger::new(quiet, verbose, file);
    log::set_max_level(logger.level());
    log::set_boxed_logger(Box::new(logger))
        .map_err(|e| CliError::other(format!("Failed to install logger: {e}")))
}

/// Print an empty line at info level.
pub fn log_blank() {
    log::info!("");
}
