//! SQLite schema creation and migration.

use rusqlite::{Connection, ErrorCode};
use thiserror::Error;

use crate::auth::register_functions;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Migration error: expected version {expected}, found {found}")]
    VersionMismatch { expected: i32, found: i32 },
}

/// Why a database could not be opened, for user-facing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenFailure {
    /// The process may not read or write the file.
    AccessDenied,
    /// The path does not exist or is not a SQLite database.
    BadDatabase,
    Other,
}

impl SchemaError {
    /// Classify this error the way the connect diagnostics report it.
    pub fn open_failure(&self) -> OpenFailure {
        match self {
            Self::Sqlite(rusqlite::Error::SqliteFailure(e, _)) => match e.code {
                ErrorCode::PermissionDenied | ErrorCode::ReadOnly => OpenFailure::AccessDenied,
                ErrorCode::CannotOpen | ErrorCode::NotADatabase => OpenFailure::BadDatabase,
                _ => OpenFailure::Other,
            },
            _ => OpenFailure::Other,
        }
    }
}

/// Current schema version. Increment when adding migrations.
pub const CURRENT_VERSION: i32 = 1;

/// Create all tables and indexes if they don't exist.
///
/// Idempotent on an existing database.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(SCHEMA_SQL)?;
    set_schema_version(conn, CURRENT_VERSION)?;
    Ok(())
}

/// Open or create a Beyblade database at the given path.
pub fn open_database(path: &std::path::Path) -> Result<Connection, SchemaError> {
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    register_functions(&conn)?;

    let version = get_schema_version(&conn)?;
    if version == 0 {
        log::debug!("Creating schema v{} in {}", CURRENT_VERSION, path.display());
        create_schema(&conn)?;
    } else if version != CURRENT_VERSION {
        return Err(SchemaError::VersionMismatch {
            expected: CURRENT_VERSION,
            found: version,
        });
    }

    Ok(conn)
}

/// Open an in-memory database with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    register_functions(&conn)?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Get the current schema version, or 0 if no schema exists.
fn get_schema_version(conn: &Connection) -> Result<i32, SchemaError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
        [],
        |row| row.get(0),
    )?;

    if !exists {
        return Ok(0);
    }

    let version: i32 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )?;
    Ok(version)
}

/// Record a schema version.
fn set_schema_version(conn: &Connection, version: i32) -> Result<(), SchemaError> {
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

const SCHEMA_SQL: &str = r#"
-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Application users
CREATE TABLE IF NOT EXISTS users (
    user_id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL,
    email TEXT NOT NULL,
    is_admin BOOLEAN NOT NULL DEFAULT 0,
    date_joined TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE UNIQUE INDEX IF NOT EXISTS idx_users_username ON users(username COLLATE NOCASE);

-- Credentials, only read by the authentication check
CREATE TABLE IF NOT EXISTS user_info (
    username TEXT PRIMARY KEY COLLATE NOCASE,
    salt TEXT NOT NULL,
    password_hash TEXT NOT NULL
);

-- Individual parts
CREATE TABLE IF NOT EXISTS parts (
    part_id INTEGER PRIMARY KEY,
    part_type TEXT NOT NULL CHECK (part_type IN
        ('Face Bolt', 'Energy Ring', 'Fusion Wheel', 'Spin Track', 'Performance Tip')),
    weight REAL NOT NULL CHECK (weight >= 0),
    description TEXT NOT NULL DEFAULT ''
);
CREATE INDEX IF NOT EXISTS idx_parts_type ON parts(part_type);

-- Assembled Beyblades, one part per slot
CREATE TABLE IF NOT EXISTS beyblades (
    beyblade_id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    type TEXT NOT NULL CHECK (type IN ('Attack', 'Defense', 'Stamina', 'Balance')),
    is_custom BOOLEAN NOT NULL DEFAULT 0,
    series TEXT NOT NULL DEFAULT '',
    face_bolt_id INTEGER NOT NULL REFERENCES parts(part_id),
    energy_ring_id INTEGER NOT NULL REFERENCES parts(part_id),
    fusion_wheel_id INTEGER NOT NULL REFERENCES parts(part_id),
    spin_track_id INTEGER NOT NULL REFERENCES parts(part_id),
    performance_tip_id INTEGER NOT NULL REFERENCES parts(part_id)
);
CREATE INDEX IF NOT EXISTS idx_beyblades_type ON beyblades(type);

-- Owned instances
CREATE TABLE IF NOT EXISTS beycollection (
    user_beyblade_id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL REFERENCES users(user_id),
    beyblade_id INTEGER NOT NULL REFERENCES beyblades(beyblade_id),
    bey_condition TEXT
);
CREATE INDEX IF NOT EXISTS idx_collection_user ON beycollection(user_id);

-- Battle results; beyblade and winner ids point at collection entries
CREATE TABLE IF NOT EXISTS battles (
    battle_id INTEGER PRIMARY KEY AUTOINCREMENT,
    tournament_name TEXT NOT NULL,
    battle_date TEXT NOT NULL,
    location TEXT NOT NULL,
    player1_id INTEGER NOT NULL REFERENCES users(user_id),
    player2_id INTEGER NOT NULL REFERENCES users(user_id),
    player1_beyblade_id INTEGER NOT NULL REFERENCES beycollection(user_beyblade_id),
    player2_beyblade_id INTEGER NOT NULL REFERENCES beycollection(user_beyblade_id),
    winner_id INTEGER REFERENCES beycollection(user_beyblade_id)
);
CREATE INDEX IF NOT EXISTS idx_battles_tournament ON battles(tournament_name);
CREATE INDEX IF NOT EXISTS idx_battles_location ON battles(location);
CREATE INDEX IF NOT EXISTS idx_battles_winner ON battles(winner_id);
"#;
