//! Menu action handlers, shared by both front ends.
//!
//! Each handler asks all of its questions first, then validates, then makes
//! one database call. A rejected field or failed call is printed and the
//! handler returns `Ok`, so the menu carries on. Only terminal I/O errors
//! and end of input propagate.

mod add;
mod view;

use std::io::{BufRead, Write};

use beydb_core::ParseError;
use beydb_lib::Action;

use crate::CliError;
use crate::prompt::Console;
use crate::session::Session;

/// Run one menu action. `Action::Quit` is handled by the menu loop.
pub fn execute<R: BufRead, W: Write>(
    action: Action,
    session: &Session<'_>,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    if !session.permissions.allows(action) {
        return console.alert("You do not have permission to do that.");
    }
    if let Some(banner) = action.banner() {
        console.success(banner)?;
    }

    match action {
        Action::AddPart => add::part(session, console),
        Action::AddBeyblade => add::beyblade(session, console),
        Action::AddToCollection => add::to_collection(session, console),
        Action::AddBattle => add::battle(session, console),
        Action::AddUser => add::user(session, console),
        Action::ViewBeyblades => view::beyblades(session, console),
        Action::ViewUserBeyblades => view::user_beyblades(session, console),
        Action::ViewOwnBeyblades => view::own_beyblades(session, console),
        Action::ViewParts => view::parts(session, console),
        Action::ViewBeybladeParts => view::beyblade_parts(session, console),
        Action::ViewPart => view::part(session, console),
        Action::HeaviestOfType => view::heaviest(session, console),
        Action::TournamentNames => view::tournament_names(session, console),
        Action::TournamentBattles => view::tournament_battles(session, console),
        Action::BattleLocations => view::battle_locations(session, console),
        Action::LocationBattles => view::location_battles(session, console),
        Action::ViewUsers => view::users(session, console),
        Action::UserBattles => view::user_battles(session, console),
        Action::OwnBattles => view::own_battles(session, console),
        Action::Leaderboard => view::leaderboard(session, console),
        Action::Quit => Ok(()),
    }
}

/// Message shown when a field fails validation.
fn rejection(err: &ParseError) -> String {
    match err {
        ParseError::InvalidWeight(_) => "Invalid weight. Please enter a numeric value.".to_string(),
        ParseError::UnknownBeybladeType(_) => format!(
            "Error: Invalid Beyblade type. Please enter one of {}.",
            beydb_core::BeybladeType::choices()
        ),
        other => format!("Error: {other}"),
    }
}
