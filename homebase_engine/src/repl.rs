//! REPL and command handling utilities.
//!
//! Handlers take a [`Session`] and return a [`Reply`]; they never print. [`run_repl`] is the
//! terminal adapter that reads lines, feeds them to [`Session::execute`] and renders replies.

mod input;
pub mod inventory;
pub mod movement;
pub mod npc;
pub mod quest;
pub mod system;

pub use inventory::*;
pub use movement::*;
pub use npc::*;
pub use quest::*;
pub use system::*;

use crate::command::Command;
use crate::session::{Session, SessionError};
use crate::style::GameStyle;

use anyhow::Result;
use log::{error, info};
use textwrap::{fill, termwidth};

use input::{InputEvent, InputManager};

/// Result of one command: text for the player, or the signal to end the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Message(String),
    Quit,
}

impl Reply {
    pub fn message(text: impl Into<String>) -> Self {
        Reply::Message(text.into())
    }

    /// The reply text, if this isn't `Quit`.
    pub fn text(&self) -> Option<&str> {
        match self {
            Reply::Message(text) => Some(text),
            Reply::Quit => None,
        }
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, Reply::Quit)
    }
}

/// Route a parsed command to its handler.
///
/// # Errors
/// - whatever the handler reports: a failed store write or an unknown player location
pub fn dispatch_command(session: &mut Session, command: &Command) -> Result<Reply, SessionError> {
    #[allow(clippy::enum_glob_use)]
    use Command::*;
    match command {
        MoveTo(direction) => move_to_handler(session, direction),
        Take(thing) => take_handler(session, thing),
        Inventory => Ok(inv_handler(session)),
        TalkTo(name) => talk_to_handler(session, name),
        Quest(description) => quest_handler(session, description),
        Quit => Ok(quit_handler(session)),
        Unknown => Ok(Reply::message("I don't understand that command.")),
    }
}

/// Run the main read–eval–print loop until the player quits or input ends.
///
/// Store failures are reported to the player and the loop keeps going.
///
/// # Errors
/// - if the player's room can't be described at startup
pub fn run_repl(session: &mut Session) -> Result<()> {
    let mut input_manager = InputManager::new();
    let prompt = "\n>> ".prompt_style().to_string();

    println!("{}", wrap(&session.look()?).description_style());

    loop {
        let Ok(input_event) = input_manager.read_line(&prompt) else {
            println!("{}", "Failed to read input. Try again.".error_style());
            continue;
        };

        let input = match input_event {
            InputEvent::Line(line) => line,
            InputEvent::Eof => "quit".to_string(),
            InputEvent::Interrupted => {
                println!("Command canceled.");
                continue;
            },
        };

        match session.execute(&input) {
            Ok(Reply::Message(text)) => println!("{}", wrap(&text)),
            Ok(Reply::Quit) => {
                info!("session ended by player");
                println!("{}", "Goodbye.".banner_style());
                break;
            },
            Err(err) => {
                error!("command '{}' failed: {err}", input.trim());
                println!("{}", err.to_string().error_style());
            },
        }
    }
    Ok(())
}

/// Wrap each line of a reply to the terminal width.
fn wrap(text: &str) -> String {
    let width = termwidth();
    text.lines().map(|line| fill(line, width)).collect::<Vec<_>>().join("\n")
}
