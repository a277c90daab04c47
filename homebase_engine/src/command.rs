//! Command module
//!
//! Describes possible commands used during gameplay. Input is a verb followed by a single
//! free-text argument (the rest of the line).
use variantly;

use crate::room::{capitalize_first, capitalize_name};

/// Commands that can be executed by the player.
#[derive(Debug, Clone, PartialEq, Eq, variantly::Variantly)]
pub enum Command {
    Inventory,
    MoveTo(String),
    Quest(String),
    Quit,
    Take(String),
    TalkTo(String),
    Unknown,
}

/// Parses an input line and returns the corresponding `Command`.
///
/// The verb is case-insensitive. The argument keeps its casing except where a verb
/// normalizes it: directions are lower-cased, character names are capitalized, and quest
/// descriptions get an upper-case first letter.
pub fn parse_command(input: &str) -> Command {
    let line = input.trim();
    let (verb, argument) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };
    match verb.to_lowercase().as_str() {
        "move" => Command::MoveTo(argument.to_lowercase()),
        "take" => Command::Take(argument.to_string()),
        "inventory" => Command::Inventory,
        "talk" => Command::TalkTo(capitalize_name(argument)),
        "quest" => Command::Quest(capitalize_first(argument)),
        "quit" => Command::Quit,
        _ => Command::Unknown,
    }
}
