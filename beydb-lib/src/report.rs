//! Turning query results into printable reports.
//!
//! Each builder runs exactly one lookup (two for the heaviest-of-type report)
//! and never fails on an empty result; that becomes [`Report::NotFound`].

use beydb_core::{BattleRow, BeybladeType, Part};
use beydb_db::{BattleFilter, OperationError};
use rusqlite::Connection;

use crate::Table;

/// Something to show the operator after a read.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    /// A grid, optionally introduced by a title line.
    Table { title: Option<String>, table: Table },
    /// A titled single-column list.
    List { title: String, items: Vec<String> },
    /// A one-line positive answer.
    Found(String),
    /// Nothing matched.
    NotFound(String),
}

impl Report {
    fn table_or(title: Option<&str>, table: Table, empty: impl Into<String>) -> Self {
        if table.is_empty() {
            Self::NotFound(empty.into())
        } else {
            Self::Table {
                title: title.map(str::to_string),
                table,
            }
        }
    }

    fn list_or(title: &str, items: Vec<String>, empty: &str) -> Self {
        if items.is_empty() {
            Self::NotFound(empty.to_string())
        } else {
            Self::List {
                title: title.to_string(),
                items,
            }
        }
    }
}

pub fn yes_no(flag: bool) -> String {
    let text = if flag { "Yes" } else { "No" };
    text.to_string()
}

/// Winner column: the collection entry id, or `Draw`.
pub fn winner_cell(winner: Option<i64>) -> String {
    winner.map_or_else(|| "Draw".to_string(), |id| id.to_string())
}

// ── Beyblades ───────────────────────────────────────────────────────────────

const BEYBLADE_HEADERS: &[&str] = &[
    "Beyblade ID",
    "Name",
    "Type",
    "Is Custom",
    "Series",
    "Face Bolt ID",
    "Energy Ring ID",
    "Fusion Wheel ID",
    "Spin Track ID",
    "Performance Tip ID",
];

pub fn all_beyblades(conn: &Connection) -> Result<Report, OperationError> {
    let mut table = Table::new(BEYBLADE_HEADERS);
    for b in beydb_db::list_beyblades(conn)? {
        let mut row = vec![
            b.beyblade_id.to_string(),
            b.name,
            b.beyblade_type.to_string(),
            yes_no(b.is_custom),
            b.series,
        ];
        row.extend(b.parts.ids().iter().map(|id| id.to_string()));
        table.push_row(row);
    }
    Ok(Report::table_or(None, table, "No Beyblades found in the database."))
}

pub fn user_beyblades(conn: &Connection, username: &str) -> Result<Report, OperationError> {
    let mut table = Table::new(&[
        "Beyblade-Player ID",
        "Beyblade ID",
        "Name",
        "Is Custom",
        "Condition",
    ]);
    for owned in beydb_db::user_beyblades(conn, username)? {
        table.push_row(vec![
            owned.user_beyblade_id.to_string(),
            owned.beyblade_id.to_string(),
            owned.name,
            yes_no(owned.is_custom),
            owned.condition.unwrap_or_default(),
        ]);
    }
    Ok(Report::table_or(
        None,
        table,
        format!("No Beyblades found for user: {username}"),
    ))
}

/// The heaviest Beyblade of a type, resolved to its name.
pub fn heaviest_of_type(
    conn: &Connection,
    beyblade_type: BeybladeType,
) -> Result<Report, OperationError> {
    let Some(id) = beydb_db::heaviest_beyblade_for_type(conn, beyblade_type)? else {
        return Ok(Report::NotFound(format!(
            "No heaviest Beyblade found for type '{beyblade_type}'."
        )));
    };
    Ok(match beydb_db::beyblade_name(conn, id)? {
        Some(name) => Report::Found(format!(
            "The heaviest Beyblade of type '{beyblade_type}' is ID: {id}, Name: {name}"
        )),
        None => Report::NotFound(format!("No Beyblade found with ID: {id}")),
    })
}

// ── Parts ───────────────────────────────────────────────────────────────────

fn parts_table(headers: &[&str], parts: Vec<Part>) -> Table {
    let mut table = Table::new(headers);
    for p in parts {
        table.push_row(vec![
            p.part_id.to_string(),
            p.part_type.to_string(),
            p.weight.to_string(),
            p.description,
        ]);
    }
    table
}

const PART_LIST_HEADERS: &[&str] = &["Part ID", "Part Type", "Weight (g)", "Description"];

pub fn all_parts(conn: &Connection) -> Result<Report, OperationError> {
    let table = parts_table(PART_LIST_HEADERS, beydb_db::list_parts(conn)?);
    Ok(Report::table_or(
        Some("Beyblade Parts List:"),
        table,
        "No parts found in the database.",
    ))
}

pub fn beyblade_parts(conn: &Connection, beyblade_id: i64) -> Result<Report, OperationError> {
    let table = parts_table(
        PART_LIST_HEADERS,
        beydb_db::beyblade_parts(conn, beyblade_id)?,
    );
    Ok(Report::table_or(
        None,
        table,
        format!("No parts found for Beyblade ID: {beyblade_id}"),
    ))
}

pub fn part_info(conn: &Connection, part_id: i64) -> Result<Report, OperationError> {
    let parts = beydb_db::find_part(conn, part_id)?.into_iter().collect();
    let table = parts_table(&["Part ID", "Part Type", "Weight", "Description"], parts);
    Ok(Report::table_or(
        None,
        table,
        format!("No information found for part ID: {part_id}"),
    ))
}

// ── Battles ─────────────────────────────────────────────────────────────────

pub fn tournament_names(conn: &Connection) -> Result<Report, OperationError> {
    Ok(Report::list_or(
        "List of Tournament Names:",
        beydb_db::tournament_names(conn)?,
        "No tournaments found in the database.",
    ))
}

pub fn battle_locations(conn: &Connection) -> Result<Report, OperationError> {
    Ok(Report::list_or(
        "List of Battle Locations:",
        beydb_db::battle_locations(conn)?,
        "No battle locations found in the database.",
    ))
}

/// Column that may appear before the player columns of a battle table.
#[derive(Clone, Copy)]
enum BattleColumn {
    Tournament,
    Date,
    Location,
}

const PLAYER_HEADERS: &[&str] = &[
    "Player 1 Username",
    "Player 2 Username",
    "Player 1 Beyblade Name",
    "Player 2 Beyblade Name",
    "Player 1 Beyblade ID",
    "Player 2 BeyBlade ID",
    "Winner ID",
];

/// Battle table with `Battle ID`, the given leading columns, then the player columns.
fn battle_table(leading: &[BattleColumn], rows: Vec<BattleRow>) -> Table {
    let mut headers = vec!["Battle ID"];
    headers.extend(leading.iter().map(|c| match c {
        BattleColumn::Tournament => "Tournament Name",
        BattleColumn::Date => "Date",
        BattleColumn::Location => "Location",
    }));
    headers.extend_from_slice(PLAYER_HEADERS);

    let mut table = Table::new(&headers);
    for b in rows {
        let mut row = vec![b.battle_id.to_string()];
        for c in leading {
            row.push(match c {
                BattleColumn::Tournament => b.tournament_name.clone(),
                BattleColumn::Date => b.battle_date.clone(),
                BattleColumn::Location => b.location.clone(),
            });
        }
        row.extend([
            b.player1_username,
            b.player2_username,
            b.player1_beyblade_name,
            b.player2_beyblade_name,
            b.player1_beyblade_id.to_string(),
            b.player2_beyblade_id.to_string(),
            winner_cell(b.winner_id),
        ]);
        table.push_row(row);
    }
    table
}

pub fn tournament_battles(conn: &Connection, tournament: &str) -> Result<Report, OperationError> {
    let rows = beydb_db::battles(conn, BattleFilter::Tournament(tournament))?;
    let table = battle_table(&[BattleColumn::Date, BattleColumn::Location], rows);
    Ok(Report::table_or(
        None,
        table,
        format!("No battles found for tournament: {tournament}"),
    ))
}

pub fn location_battles(conn: &Connection, location: &str) -> Result<Report, OperationError> {
    let rows = beydb_db::battles(conn, BattleFilter::Location(location))?;
    let table = battle_table(&[BattleColumn::Tournament, BattleColumn::Date], rows);
    Ok(Report::table_or(
        None,
        table,
        format!("No battles found for location: {location}"),
    ))
}

pub fn user_battles(conn: &Connection, username: &str) -> Result<Report, OperationError> {
    let rows = beydb_db::battles(conn, BattleFilter::Username(username))?;
    let table = battle_table(
        &[
            BattleColumn::Tournament,
            BattleColumn::Date,
            BattleColumn::Location,
        ],
        rows,
    );
    Ok(Report::table_or(
        None,
        table,
        format!("No battles found for user: {username}"),
    ))
}

pub fn leaderboard(conn: &Connection) -> Result<Report, OperationError> {
    let mut table = Table::new(&["Beyblade ID", "Name", "Type", "Wins"]);
    for r in beydb_db::leaderboard(conn)? {
        table.push_row(vec![
            r.beyblade_id.to_string(),
            r.name,
            r.beyblade_type.to_string(),
            r.wins.to_string(),
        ]);
    }
    Ok(Report::table_or(
        Some("Beyblade Leaderboard (Most Wins):"),
        table,
        "No battle results found.",
    ))
}

// ── Users ───────────────────────────────────────────────────────────────────

pub fn users(conn: &Connection) -> Result<Report, OperationError> {
    let mut table = Table::new(&["ID", "Username", "Email", "Admin", "Date Joined"]);
    for u in beydb_db::list_users(conn)? {
        table.push_row(vec![
            u.user_id.to_string(),
            u.username,
            u.email,
            yes_no(u.is_admin),
            u.date_joined,
        ]);
    }
    Ok(Report::table_or(Some("Current Users:"), table, "No users found."))
}

#[cfg(test)]
#[path = "tests/report_tests.rs"]
mod tests;
