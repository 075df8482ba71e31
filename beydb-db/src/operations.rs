//! Write operations: plain inserts plus the multi-row "procedures".
//!
//! The procedures (`register_user`, `add_user_beyblade`, `record_battle`)
//! run all of their statements in one transaction.

use beydb_core::{Beyblade, BeybladeDraft, NewBattle, NewUser, Part};
use rusqlite::{Connection, OptionalExtension, params};
use thiserror::Error;

use crate::auth::make_salt;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Entity not found: {entity_type} with id '{id}'")]
    NotFound { entity_type: String, id: String },
    #[error("Username '{0}' is already taken")]
    DuplicateUsername(String),
    #[error("Invalid battle: {0}")]
    InvalidBattle(String),
}

impl OperationError {
    fn not_found(entity_type: &str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }
}

// ── Part Operations ─────────────────────────────────────────────────────────

/// Insert a new part. Fails if the id is already taken.
pub fn insert_part(conn: &Connection, part: &Part) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO parts (part_id, part_type, weight, description) VALUES (?1, ?2, ?3, ?4)",
        params![
            part.part_id,
            part.part_type.display_name(),
            part.weight,
            part.description,
        ],
    )?;
    Ok(())
}

// ── Beyblade Operations ─────────────────────────────────────────────────────

/// Insert a fully specified Beyblade (caller-chosen id).
///
/// All five part ids must already exist; the foreign keys reject it otherwise.
pub fn insert_beyblade(conn: &Connection, beyblade: &Beyblade) -> Result<(), OperationError> {
    let [fb, er, fw, st, pt] = beyblade.parts.ids();
    conn.execute(
        "INSERT INTO beyblades (beyblade_id, name, type, is_custom, series,
             face_bolt_id, energy_ring_id, fusion_wheel_id, spin_track_id, performance_tip_id)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            beyblade.beyblade_id,
            beyblade.name,
            beyblade.beyblade_type.display_name(),
            beyblade.is_custom,
            beyblade.series,
            fb,
            er,
            fw,
            st,
            pt,
        ],
    )?;
    Ok(())
}

/// Build a new custom Beyblade and add it to a user's collection.
///
/// Returns the new collection entry id.
pub fn add_user_beyblade(
    conn: &Connection,
    user_id: i64,
    draft: &BeybladeDraft,
    condition: &str,
) -> Result<i64, OperationError> {
    let tx = conn.unchecked_transaction()?;

    let [fb, er, fw, st, pt] = draft.parts.ids();
    tx.execute(
        "INSERT INTO beyblades (name, type, is_custom, series,
             face_bolt_id, energy_ring_id, fusion_wheel_id, spin_track_id, performance_tip_id)
         VALUES (?1, ?2, 1, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            draft.name,
            draft.beyblade_type.display_name(),
            draft.series,
            fb,
            er,
            fw,
            st,
            pt,
        ],
    )?;
    let beyblade_id = tx.last_insert_rowid();

    tx.execute(
        "INSERT INTO beycollection (user_id, beyblade_id, bey_condition) VALUES (?1, ?2, ?3)",
        params![user_id, beyblade_id, condition],
    )?;
    let entry_id = tx.last_insert_rowid();

    tx.commit()?;
    Ok(entry_id)
}

// ── User Operations ─────────────────────────────────────────────────────────

/// Register a user together with their credential record.
///
/// Usernames are unique ignoring case. Returns the new user id.
pub fn register_user(conn: &Connection, user: &NewUser) -> Result<i64, OperationError> {
    let tx = conn.unchecked_transaction()?;

    let taken: bool = tx.query_row(
        "SELECT EXISTS(SELECT 1 FROM users WHERE username = ?1 COLLATE NOCASE)
             OR EXISTS(SELECT 1 FROM user_info WHERE username = ?1)",
        params![user.username],
        |row| row.get(0),
    )?;
    if taken {
        return Err(OperationError::DuplicateUsername(user.username.clone()));
    }

    let salt = make_salt();
    tx.execute(
        "INSERT INTO user_info (username, salt, password_hash)
         VALUES (?1, ?2, sha256_hex(?2 || ?3))",
        params![user.username, salt, user.password],
    )?;
    tx.execute(
        "INSERT INTO users (username, email, is_admin) VALUES (?1, ?2, ?3)",
        params![user.username, user.email, user.is_admin],
    )?;
    let user_id = tx.last_insert_rowid();

    tx.commit()?;
    Ok(user_id)
}

/// Resolve a username (case-insensitive) to its user id.
pub fn find_user_id(conn: &Connection, username: &str) -> Result<Option<i64>, OperationError> {
    conn.query_row(
        "SELECT user_id FROM users WHERE username = ?1 COLLATE NOCASE",
        params![username],
        |row| row.get(0),
    )
    .optional()
    .map_err(Into::into)
}

// ── Battle Operations ───────────────────────────────────────────────────────

/// Record a battle result. Returns the new battle id.
///
/// Each collection entry must belong to the player it is listed under, the
/// players must differ, and the winner (if any) must be one of the two entries.
pub fn record_battle(conn: &Connection, battle: &NewBattle) -> Result<i64, OperationError> {
    if battle.player1_id == battle.player2_id {
        return Err(OperationError::InvalidBattle(
            "a player cannot battle themselves".to_string(),
        ));
    }
    if battle.player1_beyblade_id == battle.player2_beyblade_id {
        return Err(OperationError::InvalidBattle(
            "both players listed the same Beyblade".to_string(),
        ));
    }
    if let Some(winner) = battle.winner_id
        && winner != battle.player1_beyblade_id
        && winner != battle.player2_beyblade_id
    {
        return Err(OperationError::InvalidBattle(format!(
            "winner {winner} is neither {} nor {}",
            battle.player1_beyblade_id, battle.player2_beyblade_id,
        )));
    }

    let tx = conn.unchecked_transaction()?;

    for (player, entry) in [
        (battle.player1_id, battle.player1_beyblade_id),
        (battle.player2_id, battle.player2_beyblade_id),
    ] {
        let owner: Option<i64> = tx
            .query_row(
                "SELECT user_id FROM beycollection WHERE user_beyblade_id = ?1",
                params![entry],
                |row| row.get(0),
            )
            .optional()?;
        match owner {
            None => return Err(OperationError::not_found("collection entry", entry)),
            Some(owner) if owner != player => {
                return Err(OperationError::InvalidBattle(format!(
                    "Beyblade-Player {entry} belongs to user {owner}, not user {player}"
                )));
            }
            Some(_) => {}
        }
    }

    tx.execute(
        "INSERT INTO battles (tournament_name, battle_date, location, player1_id, player2_id,
             player1_beyblade_id, player2_beyblade_id, winner_id)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            battle.tournament_name,
            battle.battle_date,
            battle.location,
            battle.player1_id,
            battle.player2_id,
            battle.player1_beyblade_id,
            battle.player2_beyblade_id,
            battle.winner_id,
        ],
    )?;
    let battle_id = tx.last_insert_rowid();

    tx.commit()?;
    Ok(battle_id)
}
