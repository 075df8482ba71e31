//! Line-oriented terminal I/O for an interactive session.
//!
//! Generic over the reader and writer so scripted sessions can run against
//! byte buffers.

use std::fmt::Display;
use std::io::{BufRead, Write};

use beydb_lib::Report;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

/// Shown instead of raw error text when `verbose-errors` is off.
pub const GENERIC_ERROR: &str = "An error occurred, please contact the administrator.";

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a prompt and read one line without its line ending.
    ///
    /// End of input is reported as [`CliError::EndOfInput`].
    pub fn prompt(&mut self, label: &str) -> Result<String, CliError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(CliError::EndOfInput);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Print a plain line.
    pub fn line(&mut self, text: impl Display) -> Result<(), CliError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    pub fn blank(&mut self) -> Result<(), CliError> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Affirmative status line, preceded by a blank line.
    pub fn success(&mut self, msg: &str) -> Result<(), CliError> {
        writeln!(
            self.output,
            "\n{}",
            msg.if_supports_color(Stdout, |t| t.blue())
        )?;
        Ok(())
    }

    /// Alert status line, preceded by a blank line.
    pub fn alert(&mut self, msg: &str) -> Result<(), CliError> {
        writeln!(self.output, "\n{}", msg.if_supports_color(Stdout, |t| t.red()))?;
        Ok(())
    }

    /// Report a failed database call. The raw error text is only shown when
    /// built with `verbose-errors`.
    pub fn db_error(&mut self, context: &str, err: &dyn Display) -> Result<(), CliError> {
        log::debug!("{context}: {err}");
        if cfg!(feature = "verbose-errors") {
            self.alert(&format!("Error: {err}"))
        } else {
            self.alert(GENERIC_ERROR)
        }
    }

    /// Print a report: tables and lists as-is, single answers as status lines.
    pub fn report(&mut self, report: &Report) -> Result<(), CliError> {
        match report {
            Report::Table { title, table } => {
                if let Some(title) = title {
                    self.success(title)?;
                } else {
                    self.blank()?;
                }
                write!(self.output, "{table}")?;
            }
            Report::List { title, items } => {
                self.success(title)?;
                for item in items {
                    self.line(item)?;
                }
            }
            Report::Found(msg) => self.success(msg)?,
            Report::NotFound(msg) => self.alert(msg)?,
        }
        Ok(())
    }
}
