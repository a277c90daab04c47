//! Room definitions and spatial utilities.
//!
//! A room is a node in the world graph. Exits are directed: an exit "east" from A to B says
//! nothing about how (or whether) B leads back to A.

use crate::{Id, Quest, World};

/// An exit from one room to another, keyed by a free-form direction token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exit {
    pub direction: String,
    pub to: Id,
}

/// Someone the player can talk to. A character may own one quest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub name: String,
    pub dialogue: String,
    pub quest: Option<Quest>,
}

/// Any visitable location in the game world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: Id,
    pub name: String,
    pub description: String,
    /// Item names in authored / drop order. Duplicates are allowed.
    pub items: Vec<String>,
    pub exits: Vec<Exit>,
    pub characters: Vec<Character>,
}

impl Room {
    pub fn new(id: impl Into<Id>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            items: Vec::new(),
            exits: Vec::new(),
            characters: Vec::new(),
        }
    }

    /// Find the exit for a direction, ignoring case.
    pub fn exit(&self, direction: &str) -> Option<&Exit> {
        let direction = direction.to_lowercase();
        self.exits
            .iter()
            .find(|exit| exit.direction.to_lowercase() == direction)
    }

    /// Find a character by exact (display-cased) name.
    pub fn character(&self, name: &str) -> Option<&Character> {
        self.characters.iter().find(|character| character.name == name)
    }

    /// Index of the first item whose trimmed name matches `query` without regard to case.
    pub fn find_item(&self, query: &str) -> Option<usize> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }
        self.items
            .iter()
            .position(|item| item.trim().to_lowercase() == query)
    }

    /// Full description: name and text followed by characters, items and exits.
    ///
    /// Exits whose target can't be found in `world` are listed under their raw id.
    pub fn describe(&self, world: &World) -> String {
        let characters = join_or_none(self.characters.iter().map(|c| c.name.clone()));
        let items = join_or_none(self.items.iter().cloned());
        let exits = join_or_none(self.exits.iter().map(|exit| {
            let target = world.room(&exit.to).map_or(exit.to.as_str(), |room| room.name.as_str());
            format!("{} to {target}", capitalize_first(&exit.direction))
        }));
        format!(
            "You are in {}. {}\nCharacters: {characters}\nItems: {items}\nExits: {exits}",
            self.name, self.description
        )
    }
}

fn join_or_none(parts: impl Iterator<Item = String>) -> String {
    let parts: Vec<String> = parts.collect();
    if parts.is_empty() { "None".to_string() } else { parts.join(", ") }
}

/// Upper-case the first character and leave the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Upper-case the first character and lower-case the rest, the way character names are
/// authored.
pub fn capitalize_name(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
