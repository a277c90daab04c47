//! `repl::system` module
//!
//! Contains repl loop handlers for commands that are for system utilities.

use crate::repl::Reply;
use crate::session::Session;

use log::info;

/// Quit the game.
pub fn quit_handler(session: &Session) -> Reply {
    info!("player quit in {}", session.player.location);
    info!("ending inventory:");
    session.player.inventory.iter().for_each(|item| info!("- {item}"));
    info!("ending quests:");
    session
        .player
        .quests
        .values()
        .for_each(|quest| info!("* {} ({})", quest.description, quest.status()));
    Reply::Quit
}
