//! Login and the per-session context threaded through every handler.

use std::io::{BufRead, Write};

use beydb_core::{NewUser, ParseError, Role, require};
use beydb_lib::Permissions;
use rusqlite::Connection;

use crate::CliError;
use crate::prompt::Console;

/// Everything a handler needs: the one database connection, who is logged
/// in, and what they may do.
pub struct Session<'c> {
    pub conn: &'c Connection,
    pub role: Role,
    pub permissions: Permissions,
    pub username: String,
}

impl<'c> Session<'c> {
    pub fn new(conn: &'c Connection, role: Role, username: impl Into<String>) -> Self {
        Self {
            conn,
            role,
            permissions: Permissions::for_role(role),
            username: username.into(),
        }
    }
}

fn login_banner(role: Role) -> String {
    format!("\n{:-^72}\n", format!(" {} Login ", role.title()))
}

/// Prompt until a user of the right role gives a correct password.
///
/// Usernames are matched ignoring case, passwords exactly. The session
/// carries the username as registered.
pub fn login<'c, R: BufRead, W: Write>(
    conn: &'c Connection,
    role: Role,
    console: &mut Console<R, W>,
) -> Result<Session<'c>, CliError> {
    console.line(login_banner(role))?;

    loop {
        let username = console.prompt("USERNAME: ")?;
        let password = console.prompt("PASSWORD: ")?;
        let username = username.trim();

        let flag = beydb_db::admin_flag(conn, username)
            .map_err(|e| CliError::database(format!("Failed to look up user: {e}")))?;
        if flag.map(Role::from_admin_flag) != Some(role) {
            console.alert(&format!(
                "It appears that you are not a {}. Please try again!",
                role.title()
            ))?;
            continue;
        }

        let ok = beydb_db::authenticate(conn, username, &password)
            .map_err(|e| CliError::database(format!("Failed to check credentials: {e}")))?;
        if ok {
            let username = beydb_db::canonical_username(conn, username)
                .map_err(|e| CliError::database(format!("Failed to look up user: {e}")))?
                .unwrap_or_else(|| username.to_string());
            log::debug!("{} logged in as {}", username, role);
            return Ok(Session::new(conn, role, username));
        }
        console.alert("Username or password is incorrect. Please try again :)")?;
    }
}

/// Whether any administrator account exists yet.
pub fn has_admin(conn: &Connection) -> Result<bool, CliError> {
    let users = beydb_db::list_users(conn)
        .map_err(|e| CliError::database(format!("Failed to list users: {e}")))?;
    Ok(users.iter().any(|u| u.is_admin))
}

/// Register the first administrator on a database that has none.
///
/// Returns `false` without prompting if an administrator already exists.
pub fn bootstrap_admin<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
) -> Result<bool, CliError> {
    if has_admin(conn)? {
        log::warn!("An administrator already exists; skipping --bootstrap-admin.");
        return Ok(false);
    }

    console.line("\nCREATING THE FIRST ADMINISTRATOR ACCOUNT.")?;
    let username = console.prompt("Enter username: ")?;
    let email = console.prompt("Enter email: ")?;
    let password = console.prompt("Enter password: ")?;

    let username = require("Username", &username).map_err(|e| CliError::other(e.to_string()))?;
    if password.is_empty() {
        let missing = ParseError::MissingField("Password".to_string());
        return Err(CliError::other(missing.to_string()));
    }

    let user = NewUser {
        username,
        email: email.trim().to_string(),
        password,
        is_admin: true,
    };
    beydb_db::register_user(conn, &user)
        .map_err(|e| CliError::database(format!("Failed to register administrator: {e}")))?;
    console.success(&format!("Administrator '{}' added successfully.", user.username))?;
    Ok(true)
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
