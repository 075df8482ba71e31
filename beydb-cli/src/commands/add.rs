//! Write handlers: parts, Beyblades, collection entries, battles, users.

use std::io::{BufRead, Write};

use beydb_core::*;

use super::rejection;
use crate::CliError;
use crate::prompt::Console;
use crate::session::Session;

const PART_TYPE_PROMPT: &str =
    "Enter Part Type (Face Bolt, Energy Ring, Fusion Wheel, Spin Track, Performance Tip): ";
const BEYBLADE_TYPE_PROMPT: &str = "Enter Beyblade type (Attack, Defense, Stamina, Balance): ";
const SERIES_PROMPT: &str = "Enter Beyblade series (Metal Fusion, Metal Masters, Metal Fury): ";

/// Ask for the five part ids in slot order.
fn prompt_slots<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<[String; 5], CliError> {
    let mut raw: [String; 5] = Default::default();
    for (slot, part_type) in raw.iter_mut().zip(PartType::all()) {
        *slot = console.prompt(&format!("Enter {part_type} ID: "))?;
    }
    Ok(raw)
}

fn parse_slots(raw: &[String; 5]) -> Result<PartSlots, ParseError> {
    let mut ids = [0i64; 5];
    for ((id, text), part_type) in ids.iter_mut().zip(raw).zip(PartType::all()) {
        *id = parse_id(&format!("{part_type} ID"), text)?;
    }
    Ok(PartSlots::from_ids(ids))
}

// ── Parts & Beyblades ───────────────────────────────────────────────────────

pub(super) fn part<R: BufRead, W: Write>(
    session: &Session<'_>,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    let id = console.prompt("Enter Part ID: ")?;
    let part_type = console.prompt(PART_TYPE_PROMPT)?;
    let weight = console.prompt("Enter Weight (in grams): ")?;
    let description = console.prompt("Enter Description: ")?;

    let parsed = parse_id("Part ID", &id).and_then(|part_id| {
        Ok(Part {
            part_id,
            part_type: part_type.parse()?,
            weight: parse_weight(&weight)?,
            description: description.trim().to_string(),
        })
    });
    let part = match parsed {
        Ok(p) => p,
        Err(e) => return console.alert(&rejection(&e)),
    };

    match beydb_db::insert_part(session.conn, &part) {
        Ok(()) => console.success(&format!("Added new part: {} successfully.", part.part_id)),
        Err(e) => console.db_error("Failed to add part", &e),
    }
}

pub(super) fn beyblade<R: BufRead, W: Write>(
    session: &Session<'_>,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    let id = console.prompt("Enter Beyblade ID: ")?;
    let name = console.prompt("Enter Beyblade name: ")?;
    let beyblade_type = console.prompt(BEYBLADE_TYPE_PROMPT)?;
    let is_custom = console.prompt("Is this a custom Beyblade? (True/False): ")?;
    let series = console.prompt(SERIES_PROMPT)?;
    let slots = prompt_slots(console)?;

    let parsed = parse_id("Beyblade ID", &id).and_then(|beyblade_id| {
        Ok(Beyblade {
            beyblade_id,
            name: require("Beyblade name", &name)?,
            beyblade_type: beyblade_type.parse()?,
            is_custom: parse_flag(&is_custom),
            series: series.trim().to_string(),
            parts: parse_slots(&slots)?,
        })
    });
    let beyblade = match parsed {
        Ok(b) => b,
        Err(e) => return console.alert(&rejection(&e)),
    };

    match beydb_db::insert_beyblade(session.conn, &beyblade) {
        Ok(()) => console.success(&format!("Added new Beyblade: {}", beyblade.name)),
        Err(e) => console.db_error("Failed to add Beyblade", &e),
    }
}

// ── Collection ──────────────────────────────────────────────────────────────

pub(super) fn to_collection<R: BufRead, W: Write>(
    session: &Session<'_>,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    let name = console.prompt("Enter Beyblade name: ")?;
    let beyblade_type = console.prompt(BEYBLADE_TYPE_PROMPT)?;
    let series = console.prompt(SERIES_PROMPT)?;
    let slots = prompt_slots(console)?;
    let condition = console.prompt("Enter Condition of Your Beyblade (i.e. Like New): ")?;

    let parsed = require("Beyblade name", &name).and_then(|name| {
        Ok(BeybladeDraft {
            name,
            beyblade_type: beyblade_type.parse()?,
            series: series.trim().to_string(),
            parts: parse_slots(&slots)?,
        })
    });
    let draft = match parsed {
        Ok(d) => d,
        Err(e) => return console.alert(&rejection(&e)),
    };

    let user_id = match beydb_db::find_user_id(session.conn, &session.username) {
        Ok(Some(id)) => id,
        Ok(None) => {
            return console.alert(&format!("Error: User '{}' not found.", session.username));
        }
        Err(e) => return console.db_error("Failed to fetch user id", &e),
    };

    match beydb_db::add_user_beyblade(session.conn, user_id, &draft, condition.trim()) {
        Ok(entry) => {
            log::debug!("Collection entry {} created for {}", entry, session.username);
            console.success(&format!(
                "Added new Beyblade: {} for user {}",
                draft.name, session.username
            ))
        }
        Err(e) => console.db_error("Failed to add Beyblade to collection", &e),
    }
}

// ── Battles ─────────────────────────────────────────────────────────────────

pub(super) fn battle<R: BufRead, W: Write>(
    session: &Session<'_>,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    let tournament = console.prompt("Enter tournament name: ")?;
    let date = console.prompt("Enter date of the battle (YYYY-MM-DD HH:MM:SS): ")?;
    let location = console.prompt("Enter location: ")?;
    let player1 = console.prompt("Enter Player 1 ID: ")?;
    let player2 = console.prompt("Enter Player 2 ID: ")?;
    let entry1 = console.prompt("Enter Player 1 Beyblade-Player ID: ")?;
    let entry2 = console.prompt("Enter Player 2 Beyblade-Player ID: ")?;
    let winner = console.prompt("Enter Winner ID (leave blank if draw): ")?;

    let parsed = require("Tournament name", &tournament).and_then(|tournament_name| {
        Ok(NewBattle {
            tournament_name,
            battle_date: parse_battle_date(&date)?,
            location: require("Location", &location)?,
            player1_id: parse_id("Player 1 ID", &player1)?,
            player2_id: parse_id("Player 2 ID", &player2)?,
            player1_beyblade_id: parse_id("Player 1 Beyblade-Player ID", &entry1)?,
            player2_beyblade_id: parse_id("Player 2 Beyblade-Player ID", &entry2)?,
            winner_id: parse_optional_id("Winner ID", &winner)?,
        })
    });
    let battle = match parsed {
        Ok(b) => b,
        Err(e) => return console.alert(&rejection(&e)),
    };

    match beydb_db::record_battle(session.conn, &battle) {
        Ok(id) => {
            log::debug!("Recorded battle {id}");
            console.success("New battle result added successfully.")
        }
        Err(e) => console.db_error("Failed to record battle", &e),
    }
}

// ── Users ───────────────────────────────────────────────────────────────────

/// Register an account. Only roles allowed to grant admin are asked about it.
pub(super) fn user<R: BufRead, W: Write>(
    session: &Session<'_>,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    let username = console.prompt("Enter username: ")?;
    let email = console.prompt("Enter email: ")?;
    let password = console.prompt("Enter password: ")?;
    let is_admin = if session.permissions.grant_admin {
        parse_flag(&console.prompt("Is this user an admin? (True/False): ")?)
    } else {
        false
    };

    let username = match require("Username", &username) {
        Ok(u) => u,
        Err(e) => return console.alert(&rejection(&e)),
    };
    if password.is_empty() {
        return console.alert(&rejection(&ParseError::MissingField("Password".to_string())));
    }

    let user = NewUser {
        username,
        email: email.trim().to_string(),
        password,
        is_admin,
    };
    match beydb_db::register_user(session.conn, &user) {
        Ok(_) => console.success(&format!("User '{}' added successfully.", user.username)),
        Err(e) => console.db_error("Failed to add user", &e),
    }
}
