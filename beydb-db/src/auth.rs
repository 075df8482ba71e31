//! Credential hashing and the login checks.
//!
//! Password hashes are computed inside SQL through the `sha256_hex` scalar
//! function registered on every connection, so the stored hash and the
//! check always go through the same code path.

use rand::Rng;
use rand::distr::Alphanumeric;
use rusqlite::functions::FunctionFlags;
use rusqlite::{Connection, OptionalExtension, params};
use sha2::{Digest, Sha256};

use crate::operations::OperationError;

/// Length of the random salt stored with each credential.
pub const SALT_LEN: usize = 8;

/// Register the SQL functions the schema relies on.
pub fn register_functions(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        "sha256_hex",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let input: String = ctx.get(0)?;
            Ok(sha256_hex(&input))
        },
    )
}

/// Lowercase hex SHA-256 of a string.
pub fn sha256_hex(input: &str) -> String {
    Sha256::digest(input.as_bytes())
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

/// Generate a fresh alphanumeric salt.
pub fn make_salt() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(SALT_LEN)
        .map(char::from)
        .collect()
}

/// Look up the `is_admin` flag for a username (case-insensitive).
///
/// Returns `None` if no such user exists.
pub fn admin_flag(conn: &Connection, username: &str) -> Result<Option<bool>, OperationError> {
    conn.query_row(
        "SELECT is_admin FROM users WHERE username = ?1 COLLATE NOCASE",
        params![username],
        |row| row.get(0),
    )
    .optional()
    .map_err(Into::into)
}

/// The username as it was registered, for a case-insensitive match.
pub fn canonical_username(
    conn: &Connection,
    username: &str,
) -> Result<Option<String>, OperationError> {
    conn.query_row(
        "SELECT username FROM users WHERE username = ?1 COLLATE NOCASE",
        params![username],
        |row| row.get(0),
    )
    .optional()
    .map_err(Into::into)
}

/// Check a username/password pair against the stored credential.
pub fn authenticate(
    conn: &Connection,
    username: &str,
    password: &str,
) -> Result<bool, OperationError> {
    let ok: bool = conn.query_row(
        "SELECT EXISTS(
             SELECT 1 FROM user_info
             WHERE username = ?1 AND password_hash = sha256_hex(salt || ?2)
         )",
        params![username, password],
        |row| row.get(0),
    )?;
    Ok(ok)
}
