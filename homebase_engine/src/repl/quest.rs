//! `repl::quest` module
//!
//! Explicit re-checks of quests already in the player's log.

use crate::repl::Reply;
use crate::session::{Session, SessionError};

/// Handles `quest <description>`.
///
/// # Errors
/// - if the player's room is missing, or a completed quest could not be saved
pub fn quest_handler(session: &mut Session, description: &str) -> Result<Reply, SessionError> {
    let text = session
        .check_quest(description)?
        .unwrap_or_else(|| "You have not been given this quest.".to_string());
    Ok(Reply::message(text))
}
