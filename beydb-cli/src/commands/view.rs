//! Read handlers. Each asks for at most one filter and prints one report.

use std::io::{BufRead, Write};

use beydb_core::{BeybladeType, parse_id};
use beydb_db::OperationError;
use beydb_lib::{Report, report};

use super::rejection;
use crate::CliError;
use crate::prompt::Console;
use crate::session::Session;

fn show<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    context: &str,
    result: Result<Report, OperationError>,
) -> Result<(), CliError> {
    match result {
        Ok(report) => console.report(&report),
        Err(e) => console.db_error(context, &e),
    }
}

/// Prompt for an id; a non-numeric answer is printed and yields `None`.
fn prompt_id<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    label: &str,
    field: &str,
) -> Result<Option<i64>, CliError> {
    let raw = console.prompt(label)?;
    match parse_id(field, &raw) {
        Ok(id) => Ok(Some(id)),
        Err(e) => {
            console.alert(&rejection(&e))?;
            Ok(None)
        }
    }
}

// ── Beyblades ───────────────────────────────────────────────────────────────

pub(super) fn beyblades<R: BufRead, W: Write>(
    session: &Session<'_>,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    show(console, "Failed to list Beyblades", report::all_beyblades(session.conn))
}

pub(super) fn user_beyblades<R: BufRead, W: Write>(
    session: &Session<'_>,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    let username = console.prompt("Enter username: ")?;
    show(
        console,
        "Failed to list collection",
        report::user_beyblades(session.conn, username.trim()),
    )
}

pub(super) fn own_beyblades<R: BufRead, W: Write>(
    session: &Session<'_>,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    show(
        console,
        "Failed to list collection",
        report::user_beyblades(session.conn, &session.username),
    )
}

/// Reprompts until the answer names a Beyblade type.
pub(super) fn heaviest<R: BufRead, W: Write>(
    session: &Session<'_>,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    let beyblade_type = loop {
        let raw = console.prompt("Enter Beyblade type (Attack, Defense, Stamina, Balance): ")?;
        match raw.parse::<BeybladeType>() {
            Ok(t) => break t,
            Err(e) => console.alert(&rejection(&e))?,
        }
    };
    show(
        console,
        "Failed to find heaviest Beyblade",
        report::heaviest_of_type(session.conn, beyblade_type),
    )
}

// ── Parts ───────────────────────────────────────────────────────────────────

pub(super) fn parts<R: BufRead, W: Write>(
    session: &Session<'_>,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    show(console, "Failed to list parts", report::all_parts(session.conn))
}

pub(super) fn beyblade_parts<R: BufRead, W: Write>(
    session: &Session<'_>,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    let Some(id) = prompt_id(console, "Enter Beyblade ID: ", "Beyblade ID")? else {
        return Ok(());
    };
    show(
        console,
        "Failed to list Beyblade parts",
        report::beyblade_parts(session.conn, id),
    )
}

pub(super) fn part<R: BufRead, W: Write>(
    session: &Session<'_>,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    let Some(id) = prompt_id(console, "Enter part ID: ", "part ID")? else {
        return Ok(());
    };
    show(console, "Failed to look up part", report::part_info(session.conn, id))
}

// ── Battles ─────────────────────────────────────────────────────────────────

pub(super) fn tournament_names<R: BufRead, W: Write>(
    session: &Session<'_>,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    show(
        console,
        "Failed to list tournaments",
        report::tournament_names(session.conn),
    )
}

pub(super) fn battle_locations<R: BufRead, W: Write>(
    session: &Session<'_>,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    show(
        console,
        "Failed to list locations",
        report::battle_locations(session.conn),
    )
}

pub(super) fn tournament_battles<R: BufRead, W: Write>(
    session: &Session<'_>,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    let tournament = console.prompt("Enter tournament name: ")?;
    show(
        console,
        "Failed to list battles",
        report::tournament_battles(session.conn, tournament.trim()),
    )
}

pub(super) fn location_battles<R: BufRead, W: Write>(
    session: &Session<'_>,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    let location = console.prompt("Enter tournament location: ")?;
    show(
        console,
        "Failed to list battles",
        report::location_battles(session.conn, location.trim()),
    )
}

pub(super) fn user_battles<R: BufRead, W: Write>(
    session: &Session<'_>,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    let username = console.prompt("Enter username: ")?;
    show(
        console,
        "Failed to list battles",
        report::user_battles(session.conn, username.trim()),
    )
}

pub(super) fn own_battles<R: BufRead, W: Write>(
    session: &Session<'_>,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    show(
        console,
        "Failed to list battles",
        report::user_battles(session.conn, &session.username),
    )
}

pub(super) fn leaderboard<R: BufRead, W: Write>(
    session: &Session<'_>,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    show(console, "Failed to build leaderboard", report::leaderboard(session.conn))
}

// ── Users ───────────────────────────────────────────────────────────────────

pub(super) fn users<R: BufRead, W: Write>(
    session: &Session<'_>,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    show(console, "Failed to list users", report::users(session.conn))
}
