//! Shared application settings (database location, config file location).
//!
//! Both binaries resolve the database path the same way, so an admin and a
//! client started on the same machine always talk to the same file.

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Environment variable that overrides the saved database path.
pub const DATABASE_ENV: &str = "BEYDB_DATABASE";

/// File name used when nothing else names a database.
const DEFAULT_DB_FILE: &str = "beydb.sqlite";

/// The parts of `settings.toml` this crate reads. Unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
struct Settings {
    #[serde(default)]
    database: DatabaseSettings,
}

#[derive(Debug, Default, Deserialize)]
struct DatabaseSettings {
    path: Option<PathBuf>,
}

/// Canonical path to the shared settings file: `~/.config/beydb/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("beydb").join("settings.toml")
}

/// Default database location: `<data dir>/beydb/beydb.sqlite`.
pub fn default_database_path() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("beydb").join(DEFAULT_DB_FILE)
}

/// Resolve the database path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `BEYDB_DATABASE` environment variable
/// 3. Saved `database.path` in `settings.toml`
/// 4. [`default_database_path`]
pub fn resolve_database_path(cli_override: Option<PathBuf>) -> PathBuf {
    let env = std::env::var_os(DATABASE_ENV).map(PathBuf::from);
    resolve_database_path_with(cli_override, env, &settings_path())
}

/// [`resolve_database_path`] with the environment value and settings file
/// supplied by the caller.
pub fn resolve_database_path_with(
    cli_override: Option<PathBuf>,
    env: Option<PathBuf>,
    settings: &Path,
) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = env.filter(|p| !p.as_os_str().is_empty()) {
        return p;
    }
    if let Some(p) = load_database_path(settings) {
        return p;
    }
    default_database_path()
}

/// Read `database.path` from a settings file, if set.
fn load_database_path(settings: &Path) -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings).ok()?;
    let parsed: Settings = match toml::from_str(&contents) {
        Ok(s) => s,
        Err(e) => {
            log::debug!("Ignoring unreadable {}: {}", settings.display(), e);
            return None;
        }
    };
    parsed
        .database
        .path
        .filter(|p| !p.as_os_str().is_empty())
}

/// Save (or clear) the database path in `settings.toml`.
pub fn save_database_path(path: Option<&Path>) -> io::Result<()> {
    save_database_path_to(&settings_path(), path)
}

/// Save (or clear) the database path in the given settings file.
///
/// Uses `toml::Value` for a surgical update so other sections survive.
pub fn save_database_path_to(settings: &Path, path: Option<&Path>) -> io::Result<()> {
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(settings) {
        contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default()))
    } else {
        toml::Value::Table(Default::default())
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let database = table
        .entry("database")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let db_table = database
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[database] is not a table"))?;

    match path {
        Some(p) => {
            db_table.insert(
                "path".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            db_table.remove("path");
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;

    Ok(())
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
