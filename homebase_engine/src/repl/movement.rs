//! `repl::movement` module
//!
//! Contains repl loop handlers for commands that change player location

use crate::repl::Reply;
use crate::session::{Session, SessionError};

use log::info;

/// Move the player along the exit for `direction`, if the current room has one.
///
/// # Errors
/// - if the player's current room is missing from the world
pub fn move_to_handler(session: &mut Session, direction: &str) -> Result<Reply, SessionError> {
    let origin = session.current_room()?;
    let Some(destination) = session.world.neighbor(&origin.id, direction).cloned() else {
        info!("no exit '{direction}' from {}", session.player.location);
        return Ok(Reply::message("You can't go that way!"));
    };

    info!("player moved {direction}: {} -> {destination}", session.player.location);
    session.player.location = destination;
    let description = session.look()?;
    Ok(Reply::message(format!("You move {direction}.\n{description}")))
}
