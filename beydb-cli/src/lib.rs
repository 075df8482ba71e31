//! Interactive front ends for the Beyblade database.
//!
//! `beydb-admin` and `beydb-client` share everything in this crate and differ
//! only in the [`Role`] they pass to [`run`].

pub mod cli_types;
pub mod commands;
pub mod error;
pub mod logging;
pub mod menu;
pub mod prompt;
pub mod session;

use std::io::{BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use beydb_core::Role;
use beydb_db::OpenFailure;
use rusqlite::Connection;

pub use cli_types::{AdminCli, ClientCli, GlobalArgs};
pub use error::CliError;
pub use logging::log_blank;
pub use prompt::Console;

/// Open the database the flags, environment, and settings point at.
pub fn connect(args: &GlobalArgs) -> Result<Connection, CliError> {
    let path = beydb_lib::settings::resolve_database_path(args.db.clone());
    if path == beydb_lib::settings::default_database_path()
        && let Some(parent) = path.parent()
    {
        std::fs::create_dir_all(parent)?;
    }
    log::debug!("Opening database {}", path.display());

    let conn = beydb_db::open_database(&path).map_err(|e| open_error(&path, &e))?;
    log::info!("Successfully connected.");
    log_blank();

    if args.remember_db {
        beydb_lib::settings::save_database_path(Some(&path))
            .map_err(|e| CliError::config(format!("Failed to save settings: {e}")))?;
        log::info!("Saved database path {} to settings.", path.display());
    }
    Ok(conn)
}

/// Map an open failure onto the message shown before exiting.
fn open_error(path: &Path, err: &beydb_db::SchemaError) -> CliError {
    let msg = match err.open_failure() {
        OpenFailure::AccessDenied => {
            format!("Permission denied when opening the database at {}.", path.display())
        }
        OpenFailure::BadDatabase => format!(
            "Database does not exist or is not a Beyblade database: {}.",
            path.display()
        ),
        OpenFailure::Other if cfg!(feature = "verbose-errors") => err.to_string(),
        OpenFailure::Other => prompt::GENERIC_ERROR.to_string(),
    };
    CliError::database(msg)
}

/// Log in and run the menu on the given terminal.
pub fn run_session<R: BufRead, W: Write>(
    conn: &Connection,
    role: Role,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    let session = match session::login(conn, role, console) {
        Ok(s) => s,
        // Input ended before anyone logged in.
        Err(CliError::EndOfInput) => return Ok(()),
        Err(e) => return Err(e),
    };
    menu::run(&session, console)
}

/// Entry point shared by both binaries.
pub fn run(role: Role, args: &GlobalArgs, bootstrap_admin: bool) -> ExitCode {
    if let Err(e) = logging::init(args.quiet, args.verbose, args.logfile.as_deref()) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match run_inner(role, args, bootstrap_admin) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            log::logger().flush();
            ExitCode::FAILURE
        }
    }
}

fn run_inner(role: Role, args: &GlobalArgs, bootstrap_admin: bool) -> Result<(), CliError> {
    let conn = connect(args)?;

    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout());

    if bootstrap_admin {
        match session::bootstrap_admin(&conn, &mut console) {
            Ok(_) | Err(CliError::EndOfInput) => {}
            Err(e) => return Err(e),
        }
    }
    run_session(&conn, role, &mut console)
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
