//! `repl::inventory` module
//!
//! Contains repl loop handlers for commands that affect player inventory

use crate::repl::Reply;
use crate::session::{Session, SessionError};

use log::info;

/// Pick up the first room item matching `query` (trimmed, ignoring case).
///
/// # Errors
/// - if the player's room is missing, or the updated inventory could not be saved
pub fn take_handler(session: &mut Session, query: &str) -> Result<Reply, SessionError> {
    let query = query.trim();
    let room = session.current_room()?;
    let Some(index) = room.find_item(query) else {
        return Ok(Reply::message(format!("There's no {query} here.")));
    };

    let item = room.items[index].clone();
    if !session.world.catalog.is_liftable(&item) {
        info!("player tried to take fixed item '{item}'");
        return Ok(Reply::message(format!("You can't pick up the {item}.")));
    }

    session.current_room_mut()?.items.remove(index);
    session.player.inventory.push(item.clone());
    info!("player picked up '{item}' in {}", session.player.location);
    session.persist_inventory()?;
    Ok(Reply::message(format!("You picked up the {item}.")))
}

/// Show everything the player is carrying.
pub fn inv_handler(session: &Session) -> Reply {
    Reply::message(session.player.inventory_report())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryStore, ProgressStore, QuestRecheck, WorldBuilder};

    fn session() -> Session {
        let world = WorldBuilder::new("Test")
            .room("armory", "Armory", "Weapons.")
            .item("armory", "sword")
            .item("armory", "Shotgun")
            .item("armory", "furnace")
            .unliftable("furnace")
            .start("armory")
            .build()
            .unwrap();
        Session::new(world, Box::new(MemoryStore::new()), QuestRecheck::default())
    }

    #[test]
    fn take_ignores_case_and_keeps_authored_name() {
        let mut session = session();
        let reply = take_handler(&mut session, "  SHOTGUN ").unwrap();
        assert_eq!(reply.text(), Some("You picked up the Shotgun."));
        assert_eq!(session.player.inventory, vec!["Shotgun".to_string()]);
        assert_eq!(session.current_room().unwrap().items, vec!["sword", "furnace"]);
        assert_eq!(session.store().load_inventory(), vec!["Shotgun".to_string()]);
    }

    #[test]
    fn absent_item_changes_nothing() {
        let mut session = session();
        let reply = take_handler(&mut session, " laser ").unwrap();
        assert_eq!(reply.text(), Some("There's no laser here."));
        assert!(session.player.inventory.is_empty());
        assert_eq!(session.current_room().unwrap().items.len(), 3);
    }

    #[test]
    fn fixed_items_stay_put() {
        let mut session = session();
        let reply = take_handler(&mut session, "furnace").unwrap();
        assert_eq!(reply.text(), Some("You can't pick up the furnace."));
        assert!(session.player.inventory.is_empty());
        assert!(session.current_room().unwrap().items.contains(&"furnace".to_string()));
    }

    #[test]
    fn failed_save_keeps_the_pickup() {
        let world = WorldBuilder::new("Test")
            .room("a", "Alpha", "")
            .item("a", "sword")
            .start("a")
            .build()
            .unwrap();
        let mut session = Session::new(world, Box::new(MemoryStore::read_only()), QuestRecheck::default());
        let err = take_handler(&mut session, "sword").unwrap_err();
        assert!(matches!(err, SessionError::Store(_)));
        assert_eq!(session.player.inventory, vec!["sword".to_string()]);
        assert!(session.current_room().unwrap().items.is_empty());
    }

    #[test]
    fn inventory_lists_in_pickup_order() {
        let mut session = session();
        take_handler(&mut session, "sword").unwrap();
        take_handler(&mut session, "shotgun").unwrap();
        assert_eq!(
            inv_handler(&session).text(),
            Some("You are carrying: sword, Shotgun")
        );
    }
}
