//! Player -- the mutable half of a session.
use std::collections::BTreeMap;

use crate::{Id, Quest, World};

/// Where the player is, what they carry and which quests they have been given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub location: Id,
    /// Item names in pickup order; duplicates allowed.
    pub inventory: Vec<String>,
    /// Accepted quests keyed by description. Entries are never removed.
    pub quests: BTreeMap<String, Quest>,
}

impl Player {
    pub fn new(location: impl Into<Id>) -> Self {
        Self {
            location: location.into(),
            inventory: Vec::new(),
            quests: BTreeMap::new(),
        }
    }

    /// Return the display name of the player's current room.
    pub fn location_name<'a>(&self, world: &'a World) -> Option<&'a str> {
        world.room(&self.location).map(|room| room.name.as_str())
    }

    pub fn has_quest(&self, description: &str) -> bool {
        self.quests.contains_key(description)
    }

    /// Text for the `inventory` command.
    pub fn inventory_report(&self) -> String {
        if self.inventory.is_empty() {
            "You are carrying: nothing".to_string()
        } else {
            format!("You are carrying: {}", self.inventory.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inventory_report() {
        let player = Player::new("command_center");
        assert_eq!(player.inventory_report(), "You are carrying: nothing");
    }

    #[test]
    fn inventory_report_keeps_pickup_order_and_duplicates() {
        let mut player = Player::new("command_center");
        player.inventory = vec!["sword".into(), "Llama leg".into(), "sword".into()];
        assert_eq!(player.inventory_report(), "You are carrying: sword, Llama leg, sword");
    }
}
