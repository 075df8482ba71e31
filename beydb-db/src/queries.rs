//! Read queries for the Beyblade database.
//!
//! Every function returns all matching rows; callers decide how to present
//! an empty result.

use std::str::FromStr;

use beydb_core::*;
use rusqlite::{Connection, OptionalExtension, params};

use crate::operations::OperationError;

// ── Beyblade Queries ────────────────────────────────────────────────────────

/// List every Beyblade in id order.
pub fn list_beyblades(conn: &Connection) -> Result<Vec<Beyblade>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT beyblade_id, name, type, is_custom, series,
                face_bolt_id, energy_ring_id, fusion_wheel_id, spin_track_id, performance_tip_id
         FROM beyblades ORDER BY beyblade_id",
    )?;
    let rows = stmt.query_map([], row_to_beyblade)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Beyblades in a user's collection (username matched case-insensitively).
pub fn user_beyblades(
    conn: &Connection,
    username: &str,
) -> Result<Vec<OwnedBeyblade>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT ub.user_beyblade_id, b.beyblade_id, b.name, b.is_custom, ub.bey_condition
         FROM beyblades b
         JOIN beycollection ub ON b.beyblade_id = ub.beyblade_id
         JOIN users u ON ub.user_id = u.user_id
         WHERE u.username = ?1 COLLATE NOCASE
         ORDER BY ub.user_beyblade_id",
    )?;
    let rows = stmt.query_map(params![username], |row| {
        Ok(OwnedBeyblade {
            user_beyblade_id: row.get(0)?,
            beyblade_id: row.get(1)?,
            name: row.get(2)?,
            is_custom: row.get(3)?,
            condition: row.get(4)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Id of the heaviest Beyblade of a type, where a Beyblade weighs the sum of
/// its five parts. Ties go to the lowest id.
pub fn heaviest_beyblade_for_type(
    conn: &Connection,
    beyblade_type: BeybladeType,
) -> Result<Option<i64>, OperationError> {
    conn.query_row(
        "SELECT b.beyblade_id
         FROM beyblades b
         JOIN parts fb ON fb.part_id = b.face_bolt_id
         JOIN parts er ON er.part_id = b.energy_ring_id
         JOIN parts fw ON fw.part_id = b.fusion_wheel_id
         JOIN parts st ON st.part_id = b.spin_track_id
         JOIN parts pt ON pt.part_id = b.performance_tip_id
         WHERE b.type = ?1
         ORDER BY (fb.weight + er.weight + fw.weight + st.weight + pt.weight) DESC,
                  b.beyblade_id
         LIMIT 1",
        params![beyblade_type.display_name()],
        |row| row.get(0),
    )
    .optional()
    .map_err(Into::into)
}

/// Name of a Beyblade by id.
pub fn beyblade_name(conn: &Connection, beyblade_id: i64) -> Result<Option<String>, OperationError> {
    conn.query_row(
        "SELECT name FROM beyblades WHERE beyblade_id = ?1",
        params![beyblade_id],
        |row| row.get(0),
    )
    .optional()
    .map_err(Into::into)
}

// ── Part Queries ────────────────────────────────────────────────────────────

/// All parts, grouped by type then id.
pub fn list_parts(conn: &Connection) -> Result<Vec<Part>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT part_id, part_type, weight, description FROM parts ORDER BY part_type, part_id",
    )?;
    let rows = stmt.query_map([], row_to_part)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Distinct parts used by a Beyblade. A part used in several slots is listed once.
pub fn beyblade_parts(conn: &Connection, beyblade_id: i64) -> Result<Vec<Part>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT p.part_id, p.part_type, p.weight, p.description
         FROM parts p
         JOIN beyblades b ON p.part_id IN (b.face_bolt_id, b.energy_ring_id,
                                           b.fusion_wheel_id, b.spin_track_id,
                                           b.performance_tip_id)
         WHERE b.beyblade_id = ?1
         ORDER BY p.part_id",
    )?;
    let rows = stmt.query_map(params![beyblade_id], row_to_part)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Find a single part.
pub fn find_part(conn: &Connection, part_id: i64) -> Result<Option<Part>, OperationError> {
    conn.query_row(
        "SELECT part_id, part_type, weight, description FROM parts WHERE part_id = ?1",
        params![part_id],
        row_to_part,
    )
    .optional()
    .map_err(Into::into)
}

// ── Battle Queries ──────────────────────────────────────────────────────────

/// Which battles to list.
#[derive(Debug, Clone, Copy)]
pub enum BattleFilter<'a> {
    Tournament(&'a str),
    Location(&'a str),
    /// Battles where the user was either player (case-insensitive).
    Username(&'a str),
}

impl BattleFilter<'_> {
    fn where_clause(&self) -> &'static str {
        match self {
            Self::Tournament(_) => "b.tournament_name = ?1 COLLATE NOCASE",
            Self::Location(_) => "b.location = ?1 COLLATE NOCASE",
            Self::Username(_) => {
                "(u1.username = ?1 COLLATE NOCASE OR u2.username = ?1 COLLATE NOCASE)"
            }
        }
    }

    fn value(&self) -> &str {
        match self {
            Self::Tournament(v) | Self::Location(v) | Self::Username(v) => v,
        }
    }
}

/// Battles matching a filter, joined with player and Beyblade names.
pub fn battles(
    conn: &Connection,
    filter: BattleFilter<'_>,
) -> Result<Vec<BattleRow>, OperationError> {
    let sql = format!(
        "SELECT b.battle_id, b.tournament_name, b.battle_date, b.location,
                u1.username, u2.username, bb1.name, bb2.name,
                b.player1_beyblade_id, b.player2_beyblade_id, b.winner_id
         FROM battles b
         JOIN users u1 ON b.player1_id = u1.user_id
         JOIN users u2 ON b.player2_id = u2.user_id
         JOIN beycollection ub1 ON b.player1_beyblade_id = ub1.user_beyblade_id
         JOIN beyblades bb1 ON ub1.beyblade_id = bb1.beyblade_id
         JOIN beycollection ub2 ON b.player2_beyblade_id = ub2.user_beyblade_id
         JOIN beyblades bb2 ON ub2.beyblade_id = bb2.beyblade_id
         WHERE {}
         ORDER BY b.battle_date, b.battle_id",
        filter.where_clause()
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![filter.value()], |row| {
        Ok(BattleRow {
            battle_id: row.get(0)?,
            tournament_name: row.get(1)?,
            battle_date: row.get(2)?,
            location: row.get(3)?,
            player1_username: row.get(4)?,
            player2_username: row.get(5)?,
            player1_beyblade_name: row.get(6)?,
            player2_beyblade_name: row.get(7)?,
            player1_beyblade_id: row.get(8)?,
            player2_beyblade_id: row.get(9)?,
            winner_id: row.get(10)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Distinct tournament names, sorted ignoring case.
pub fn tournament_names(conn: &Connection) -> Result<Vec<String>, OperationError> {
    distinct_column(
        conn,
        "SELECT DISTINCT tournament_name FROM battles ORDER BY tournament_name COLLATE NOCASE",
    )
}

/// Distinct battle locations, sorted ignoring case.
pub fn battle_locations(conn: &Connection) -> Result<Vec<String>, OperationError> {
    distinct_column(conn, "SELECT DISTINCT location FROM battles ORDER BY location COLLATE NOCASE")
}

fn distinct_column(conn: &Connection, sql: &str) -> Result<Vec<String>, OperationError> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([], |row| row.get(0))?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Win counts per Beyblade: most wins first, ties by name ignoring case. Draws count for
/// nobody, so Beyblades without a win are absent.
pub fn leaderboard(conn: &Connection) -> Result<Vec<LeaderboardRow>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT bb.beyblade_id, bb.name, bb.type, COUNT(*) AS wins
         FROM battles b
         JOIN beycollection ub ON b.winner_id = ub.user_beyblade_id
         JOIN beyblades bb ON ub.beyblade_id = bb.beyblade_id
         GROUP BY bb.beyblade_id, bb.name, bb.type
         ORDER BY wins DESC, bb.name COLLATE NOCASE, bb.beyblade_id",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(LeaderboardRow {
            beyblade_id: row.get(0)?,
            name: row.get(1)?,
            beyblade_type: parse_column(row, 2)?,
            wins: row.get(3)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── User Queries ────────────────────────────────────────────────────────────

/// All users in id order.
pub fn list_users(conn: &Connection) -> Result<Vec<User>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT user_id, username, email, is_admin, date_joined FROM users ORDER BY user_id",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(User {
            user_id: row.get(0)?,
            username: row.get(1)?,
            email: row.get(2)?,
            is_admin: row.get(3)?,
            date_joined: row.get(4)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

/// Read a text column and parse it into a category enum.
fn parse_column<T>(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr<Err = ParseError>,
{
    let text: String = row.get(idx)?;
    text.parse().map_err(|e: ParseError| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

fn row_to_part(row: &rusqlite::Row<'_>) -> rusqlite::Result<Part> {
    Ok(Part {
        part_id: row.get(0)?,
        part_type: parse_column(row, 1)?,
        weight: row.get(2)?,
        description: row.get(3)?,
    })
}

fn row_to_beyblade(row: &rusqlite::Row<'_>) -> rusqlite::Result<Beyblade> {
    Ok(Beyblade {
        beyblade_id: row.get(0)?,
        name: row.get(1)?,
        beyblade_type: parse_column(row, 2)?,
        is_custom: row.get(3)?,
        series: row.get(4)?,
        parts: PartSlots::from_ids([
            row.get(5)?,
            row.get(6)?,
            row.get(7)?,
            row.get(8)?,
            row.get(9)?,
        ]),
    })
}
