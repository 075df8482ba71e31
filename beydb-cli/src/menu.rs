//! The interactive menu loop.

use std::io::{BufRead, Write};

use beydb_lib::{Action, actions};

use crate::CliError;
use crate::commands;
use crate::prompt::Console;
use crate::session::Session;

fn print_menu<R: BufRead, W: Write>(
    session: &Session<'_>,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    console.line("\nWhat would you like to do?")?;
    for section in actions::menu(session.role) {
        console.blank()?;
        if let Some(title) = section.title {
            console.line(format!("* {title}:"))?;
        }
        for entry in section.entries {
            console.line(format!("  ({}) {}", entry.key, entry.label))?;
        }
    }
    console.blank()
}

fn farewell<R: BufRead, W: Write>(
    session: &Session<'_>,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    let rule = "-".repeat(72);
    console.line(format!("\n{rule}\n{}\n{rule}", session.role.farewell()))
}

/// Show the menu and run actions until the operator quits or input ends.
pub fn run<R: BufRead, W: Write>(
    session: &Session<'_>,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    loop {
        print_menu(session, console)?;
        let choice = match console.prompt("Enter an option: ") {
            Ok(c) => c,
            Err(CliError::EndOfInput) => break,
            Err(e) => return Err(e),
        };

        let Some(action) = actions::lookup(session.role, &choice) else {
            console.alert(&format!(
                "Invalid option '{}'. Please choose one of the letters listed.",
                choice.trim()
            ))?;
            continue;
        };
        if action == Action::Quit {
            break;
        }

        log::debug!("{} chose {:?}", session.username, action);
        match commands::execute(action, session, console) {
            Ok(()) => {}
            Err(CliError::EndOfInput) => break,
            Err(e) => return Err(e),
        }
    }
    farewell(session, console)
}

#[cfg(test)]
#[path = "tests/menu_tests.rs"]
mod tests;
