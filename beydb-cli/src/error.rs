use thiserror::Error;

/// Errors that end a session or keep one from starting.
///
/// Failures of a single menu action are reported in place and never become a
/// `CliError`; see `Console::db_error`.
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error on the terminal or log file
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Database could not be opened or queried outside a menu action
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Input ended while a prompt was waiting
    #[error("end of input")]
    EndOfInput,

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
