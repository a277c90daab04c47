//! Data structures representing the game world.
//!
//! [`World`] owns every room of the adventure as a graph keyed by stable room ids. It is
//! assembled once by [`WorldBuilder`] (directly, or from authored data via the loader) and
//! then handed to the session. Gameplay only ever mutates it by removing picked-up items
//! from a room.

use std::collections::{HashMap, HashSet};

use log::info;
use thiserror::Error;

use crate::item::{ItemCatalog, ItemInfo};
use crate::room::{Character, Exit};
use crate::{Id, Quest, Room};

/// Problems detected while assembling a [`World`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    #[error("duplicate room id '{0}'")]
    DuplicateRoom(Id),
    #[error("unknown room '{id}' ({context})")]
    UnknownRoom { id: Id, context: String },
    #[error("quest description '{0}' is used more than once")]
    DuplicateQuest(String),
    #[error("no start room was set")]
    MissingStartRoom,
}

/// The complete room graph plus world-level metadata.
#[derive(Debug, Clone, Default)]
pub struct World {
    pub title: String,
    pub intro: String,
    pub rooms: HashMap<Id, Room>,
    pub start_room: Id,
    pub catalog: ItemCatalog,
}

impl World {
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    pub fn room_mut(&mut self, id: &str) -> Option<&mut Room> {
        self.rooms.get_mut(id)
    }

    /// Target of the exit leaving `room_id` in `direction`, if there is one.
    pub fn neighbor(&self, room_id: &str, direction: &str) -> Option<&Id> {
        self.room(room_id)
            .and_then(|room| room.exit(direction))
            .map(|exit| &exit.to)
    }

    /// Description text for a room, or `None` if the id is unknown.
    pub fn describe(&self, room_id: &str) -> Option<String> {
        self.room(room_id).map(|room| room.describe(self))
    }

    /// The authored version of a quest, looked up by its description.
    pub fn quest_template(&self, description: &str) -> Option<&Quest> {
        self.rooms
            .values()
            .flat_map(|room| room.characters.iter())
            .filter_map(|character| character.quest.as_ref())
            .find(|quest| quest.description == description)
    }

    /// Remove the first item in any room that exactly matches `name`.
    ///
    /// Returns the id of the room it was taken from.
    pub fn remove_item_anywhere(&mut self, name: &str) -> Option<Id> {
        let mut ids: Vec<&Id> = self.rooms.keys().collect();
        // keep the choice stable across runs when several rooms hold the same item
        ids.sort();
        let room_id = ids
            .into_iter()
            .find(|id| self.rooms[*id].items.iter().any(|item| item == name))?
            .clone();
        let room = self.rooms.get_mut(&room_id)?;
        let index = room.items.iter().position(|item| item == name)?;
        room.items.remove(index);
        Some(room_id)
    }
}

/// Incrementally describes a world; all references are resolved in [`WorldBuilder::build`].
#[derive(Debug, Default)]
pub struct WorldBuilder {
    title: String,
    intro: String,
    rooms: Vec<Room>,
    exits: Vec<(Id, Exit)>,
    items: Vec<(Id, String)>,
    characters: Vec<(Id, Character)>,
    catalog: Vec<ItemInfo>,
    start_room: Option<Id>,
}

impl WorldBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = intro.into();
        self
    }

    #[must_use]
    pub fn room(mut self, id: impl Into<Id>, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.rooms.push(Room::new(id, name, description));
        self
    }

    /// Place an item in a room. The same name may be placed more than once.
    #[must_use]
    pub fn item(mut self, room: impl Into<Id>, name: impl Into<String>) -> Self {
        self.items.push((room.into(), name.into()));
        self
    }

    /// Declare a one-way exit.
    #[must_use]
    pub fn exit(mut self, from: impl Into<Id>, direction: impl Into<String>, to: impl Into<Id>) -> Self {
        self.exits.push((
            from.into(),
            Exit {
                direction: direction.into(),
                to: to.into(),
            },
        ));
        self
    }

    /// Declare exits in both directions between two rooms.
    #[must_use]
    pub fn two_way(
        self,
        a: impl Into<Id>,
        a_to_b: impl Into<String>,
        b: impl Into<Id>,
        b_to_a: impl Into<String>,
    ) -> Self {
        let (a, b) = (a.into(), b.into());
        self.exit(a.clone(), a_to_b, b.clone()).exit(b, b_to_a, a)
    }

    #[must_use]
    pub fn character(mut self, room: impl Into<Id>, name: impl Into<String>, dialogue: impl Into<String>) -> Self {
        self.characters.push((
            room.into(),
            Character {
                name: name.into(),
                dialogue: dialogue.into(),
                quest: None,
            },
        ));
        self
    }

    #[must_use]
    pub fn quest_giver(
        mut self,
        room: impl Into<Id>,
        name: impl Into<String>,
        dialogue: impl Into<String>,
        quest: Quest,
    ) -> Self {
        self.characters.push((
            room.into(),
            Character {
                name: name.into(),
                dialogue: dialogue.into(),
                quest: Some(quest),
            },
        ));
        self
    }

    /// Mark an item as fixed in place.
    #[must_use]
    pub fn unliftable(mut self, name: impl Into<String>) -> Self {
        self.catalog.push(ItemInfo {
            name: name.into(),
            liftable: false,
        });
        self
    }

    #[must_use]
    pub fn catalog_entry(mut self, info: ItemInfo) -> Self {
        self.catalog.push(info);
        self
    }

    #[must_use]
    pub fn start(mut self, room: impl Into<Id>) -> Self {
        self.start_room = Some(room.into());
        self
    }

    /// Resolve every reference and produce the world graph.
    ///
    /// # Errors
    /// - duplicate room ids or quest descriptions
    /// - exits, items or characters referring to a room that was never declared
    /// - no start room, or a start room that was never declared
    pub fn build(self) -> Result<World, WorldError> {
        let mut rooms: HashMap<Id, Room> = HashMap::with_capacity(self.rooms.len());
        for room in self.rooms {
            if rooms.contains_key(&room.id) {
                return Err(WorldError::DuplicateRoom(room.id));
            }
            rooms.insert(room.id.clone(), room);
        }

        for (from, exit) in self.exits {
            if !rooms.contains_key(&exit.to) {
                return Err(WorldError::UnknownRoom {
                    id: exit.to,
                    context: format!("exit '{}' from '{from}'", exit.direction),
                });
            }
            room_entry(&mut rooms, &from, "exit origin")?.exits.push(exit);
        }

        for (room_id, item) in self.items {
            room_entry(&mut rooms, &room_id, &format!("item '{item}'"))?
                .items
                .push(item);
        }

        let mut quest_keys = HashSet::new();
        for (room_id, character) in self.characters {
            if let Some(quest) = &character.quest
                && !quest_keys.insert(quest.description.clone())
            {
                return Err(WorldError::DuplicateQuest(quest.description.clone()));
            }
            let context = format!("character '{}'", character.name);
            room_entry(&mut rooms, &room_id, &context)?.characters.push(character);
        }

        let start_room = self.start_room.ok_or(WorldError::MissingStartRoom)?;
        if !rooms.contains_key(&start_room) {
            return Err(WorldError::UnknownRoom {
                id: start_room,
                context: "start room".to_string(),
            });
        }

        let mut catalog = ItemCatalog::new();
        for info in self.catalog {
            catalog.insert(info);
        }

        info!(
            "world '{}' built: {} rooms, {} quests, {} catalog items",
            self.title,
            rooms.len(),
            quest_keys.len(),
            catalog.len()
        );
        Ok(World {
            title: self.title,
            intro: self.intro,
            rooms,
            start_room,
            catalog,
        })
    }
}

fn room_entry<'a>(rooms: &'a mut HashMap<Id, Room>, id: &str, context: &str) -> Result<&'a mut Room, WorldError> {
    rooms.get_mut(id).ok_or_else(|| WorldError::UnknownRoom {
        id: id.to_string(),
        context: context.to_string(),
    })
}
