use serde::{Deserialize, Serialize};

/// Stable identifier used across WorldDef references.
pub type Id = String;

/// Top-level authored world data loaded by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorldDef {
    pub game: GameDef,
    #[serde(default)]
    pub rooms: Vec<RoomDef>,
    #[serde(default)]
    pub items: Vec<ItemDef>,
}

/// Game-level metadata and startup configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameDef {
    pub title: String,
    #[serde(default)]
    pub intro: String,
    pub start_room: Id,
}

/// Room definition used by the engine at load time.
///
/// `name` is display text only and may repeat across rooms; `id` is what exits refer to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDef {
    pub id: Id,
    pub name: String,
    pub desc: String,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub exits: Vec<ExitDef>,
    #[serde(default)]
    pub characters: Vec<CharacterDef>,
}

/// A one-way exit. The reverse direction must be declared on the target room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExitDef {
    pub direction: String,
    pub to: Id,
}

/// A character standing in a room, with a single line of dialogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterDef {
    pub name: String,
    pub dialogue: String,
    #[serde(default)]
    pub quest: Option<QuestDef>,
}

/// A quest offered by the character that owns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestDef {
    /// Doubles as the quest's identity; must be unique across the world.
    pub description: String,
    #[serde(default)]
    pub required_items: Vec<String>,
    /// Display name of the room the player must be standing in.
    #[serde(default)]
    pub required_location: Option<String>,
}

/// Per-item catalog entry. Items missing from the catalog use the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDef {
    pub name: String,
    #[serde(default = "default_liftable")]
    pub liftable: bool,
}

fn default_liftable() -> bool {
    true
}
