use std::collections::HashSet;
use std::fmt;

use crate::*;

/// Validation error for malformed or missing references in a WorldDef.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    MissingReference { kind: &'static str, id: String, context: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id '{id}'")
            },
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and basic invariants in a WorldDef.
///
/// ```
/// use homebase_data::{GameDef, RoomDef, WorldDef, validate_world};
///
/// let world = WorldDef {
///     game: GameDef {
///         title: "Demo".into(),
///         intro: "Intro".into(),
///         start_room: "start".into(),
///     },
///     rooms: vec![RoomDef {
///         id: "start".into(),
///         name: "Start".into(),
///         desc: "A room.".into(),
///         items: Vec::new(),
///         exits: Vec::new(),
///         characters: Vec::new(),
///     }],
///     ..WorldDef::default()
/// };
/// assert!(validate_world(&world).is_empty());
/// ```
pub fn validate_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut rooms = HashSet::new();
    let mut items = HashSet::new();
    let mut quests = HashSet::new();

    track_ids("room", world.rooms.iter().map(|r| r.id.as_str()), &mut rooms, &mut errors);
    track_ids(
        "item",
        world.items.iter().map(|i| i.name.as_str()),
        &mut items,
        &mut errors,
    );
    track_ids(
        "quest",
        world
            .rooms
            .iter()
            .flat_map(|r| r.characters.iter())
            .filter_map(|c| c.quest.as_ref())
            .map(|q| q.description.as_str()),
        &mut quests,
        &mut errors,
    );

    let room_names: HashSet<&str> = world.rooms.iter().map(|r| r.name.as_str()).collect();

    if world.game.start_room.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "game start room missing".to_string(),
        });
    } else {
        check_ref("room", &world.game.start_room, &rooms, "game start room".to_string(), &mut errors);
    }

    for room in &world.rooms {
        let mut directions = HashSet::new();
        for exit in &room.exits {
            if exit.direction.trim().is_empty() {
                errors.push(ValidationError::InvalidValue {
                    context: format!("room '{}' has an exit with no direction", room.id),
                });
            }
            if !directions.insert(exit.direction.to_lowercase()) {
                errors.push(ValidationError::DuplicateId {
                    kind: "exit",
                    id: format!("{}:{}", room.id, exit.direction),
                });
            }
            check_ref(
                "room",
                &exit.to,
                &rooms,
                format!("room '{}' exit '{}'", room.id, exit.direction),
                &mut errors,
            );
        }

        let mut characters = HashSet::new();
        for character in &room.characters {
            if !characters.insert(character.name.as_str()) {
                errors.push(ValidationError::DuplicateId {
                    kind: "character",
                    id: format!("{}:{}", room.id, character.name),
                });
            }
            if let Some(quest) = &character.quest {
                if quest.description.trim().is_empty() {
                    errors.push(ValidationError::InvalidValue {
                        context: format!("quest given by '{}' has no description", character.name),
                    });
                }
                if let Some(location) = &quest.required_location
                    && !room_names.contains(location.as_str())
                {
                    errors.push(ValidationError::MissingReference {
                        kind: "room name",
                        id: location.clone(),
                        context: format!("quest '{}' required location", quest.description),
                    });
                }
            }
        }
    }

    errors
}

fn track_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
    set: &mut HashSet<String>,
    errors: &mut Vec<ValidationError>,
) {
    for id in ids {
        if !set.insert(id.to_string()) {
            errors.push(ValidationError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
}

fn check_ref(kind: &'static str, id: &str, set: &HashSet<String>, context: String, errors: &mut Vec<ValidationError>) {
    if !set.contains(id) {
        errors.push(ValidationError::MissingReference {
            kind,
            id: id.to_string(),
            context,
        });
    }
}
