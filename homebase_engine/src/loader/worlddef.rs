//! WorldDef loader and conversion helpers.
//!
//! Converts the serialized `WorldDef` data model into a runtime [`World`].

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use homebase_data::{CharacterDef, QuestDef, WorldDef};

use crate::item::ItemInfo;
use crate::{Quest, World, WorldBuilder};

/// Load a `WorldDef` from a RON file.
///
/// # Errors
/// - if the file can't be read or isn't valid RON for a `WorldDef`
pub fn load_worlddef(path: &Path) -> Result<WorldDef> {
    let text = fs::read_to_string(path).with_context(|| format!("reading worlddef from '{}'", path.display()))?;
    ron::from_str(&text).with_context(|| format!("parsing worlddef RON from '{}'", path.display()))
}

/// Convert a `WorldDef` into a [`World`].
///
/// # Errors
/// - if the definition has references that don't resolve (see [`WorldBuilder::build`])
pub fn build_world_from_def(def: &WorldDef) -> Result<World> {
    let mut builder = WorldBuilder::new(&def.game.title)
        .intro(&def.game.intro)
        .start(&def.game.start_room);

    for room_def in &def.rooms {
        builder = builder.room(&room_def.id, &room_def.name, &room_def.desc);
        for item in &room_def.items {
            builder = builder.item(&room_def.id, item);
        }
        for exit in &room_def.exits {
            builder = builder.exit(&room_def.id, &exit.direction, &exit.to);
        }
        for character in &room_def.characters {
            builder = add_character(builder, &room_def.id, character);
        }
    }

    for item_def in &def.items {
        builder = builder.catalog_entry(ItemInfo {
            name: item_def.name.clone(),
            liftable: item_def.liftable,
        });
    }

    builder
        .build()
        .with_context(|| format!("building world '{}'", def.game.title))
}

fn add_character(builder: WorldBuilder, room_id: &str, def: &CharacterDef) -> WorldBuilder {
    match &def.quest {
        Some(quest_def) => builder.quest_giver(room_id, &def.name, &def.dialogue, quest_from_def(quest_def)),
        None => builder.character(room_id, &def.name, &def.dialogue),
    }
}

fn quest_from_def(def: &QuestDef) -> Quest {
    let quest = Quest::new(&def.description).with_items(def.required_items.iter().cloned());
    match &def.required_location {
        Some(location) => quest.at_location(location),
        None => quest,
    }
}
