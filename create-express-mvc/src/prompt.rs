//! Interactive database selection

use std::io::{self, BufRead, IsTerminal};

use console::{style, Emoji};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use tracing::info;

use crate::database::DatabaseChoice;
use crate::error::{GeneratorError, Result};

static WARNING: Emoji<'_, '_> = Emoji("⚠️  ", "! ");

/// Resolve raw operator input to a backend
///
/// Unrecognized input, including an empty line, falls back to
/// [`DatabaseChoice::Mysql`] after printing a warning. This never fails.
#[must_use]
pub fn resolve_database_choice(raw: &str) -> DatabaseChoice {
    DatabaseChoice::from_input(raw).unwrap_or_else(|| {
        let fallback = DatabaseChoice::default();
        info!(input = raw.trim(), %fallback, "unrecognized database choice");
        println!(
            "{WARNING}{} {}",
            style(format!("Unrecognized database '{}'.", raw.trim())).yellow(),
            style(format!("Using {} by default.", fallback.profile().label)).yellow()
        );
        fallback
    })
}

/// Ask the operator for a backend
///
/// A terminal gets an interactive prompt. Piped input is read as a single line;
/// end of input counts as an empty answer.
///
/// # Errors
///
/// Returns an error if reading from stdin fails.
pub fn select_database() -> Result<DatabaseChoice> {
    print_options();

    let stdin = io::stdin();
    let raw = if stdin.is_terminal() {
        Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Choose your database (mysql/mongo)")
            .allow_empty(true)
            .interact_text()
            .map_err(|err| GeneratorError::Prompt(io::Error::other(err)))?
    } else {
        read_choice(&mut stdin.lock())?
    };

    let choice = resolve_database_choice(&raw);
    println!(
        "{} {}",
        style("Database:").bold(),
        style(choice.profile().label).cyan()
    );

    Ok(choice)
}

/// Read one line of input and resolve it
///
/// Bytes that are not valid UTF-8 are decoded lossily and end up as an unrecognized
/// answer rather than an error.
///
/// # Errors
///
/// Returns an error if the reader fails.
pub fn read_database_choice(reader: &mut impl BufRead) -> Result<DatabaseChoice> {
    read_choice(reader).map(|raw| resolve_database_choice(&raw))
}

fn read_choice(reader: &mut impl BufRead) -> Result<String> {
    let mut line = Vec::new();
    reader
        .read_until(b'\n', &mut line)
        .map_err(GeneratorError::Prompt)?;
    Ok(String::from_utf8_lossy(&line).into_owned())
}

fn print_options() {
    println!();
    println!("{}", style("Choose your database:").bold());
    for choice in DatabaseChoice::ALL {
        println!(
            "  {} {}",
            style(format!("{choice:>6}")).cyan(),
            choice.profile().label
        );
    }
    println!();
}
