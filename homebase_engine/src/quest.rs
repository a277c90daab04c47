//! module: quest
//!
//! A quest is finished by holding every required item while standing in the required room.
//! The description is the quest's identity everywhere: the player's quest log, the
//! character that offers it, and the persisted quest file.

use log::debug;
use serde::{Deserialize, Serialize};

/// How `talk` treats a quest the player has already completed.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestRecheck {
    /// Run the completion check on every conversation.
    #[default]
    Reevaluate,
    /// Report "Already completed" instead of checking again.
    SuppressCompleted,
}

/// A completion condition offered by a character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quest {
    pub description: String,
    /// Exact, case-sensitive item names, in authored order, without duplicates.
    pub required_items: Vec<String>,
    /// Display name of the room the player must be in.
    pub required_location: Option<String>,
    pub completed: bool,
}

impl Quest {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            required_items: Vec::new(),
            required_location: None,
            completed: false,
        }
    }

    /// Require these items (duplicates are ignored).
    #[must_use]
    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for item in items {
            let item = item.into();
            if !self.required_items.contains(&item) {
                self.required_items.push(item);
            }
        }
        self
    }

    /// Require the player to be in the room with this display name.
    #[must_use]
    pub fn at_location(mut self, location: impl Into<String>) -> Self {
        self.required_location = Some(location.into());
        self
    }

    /// Evaluate the completion predicate without changing anything.
    pub fn check(&self, inventory: &[String], room_name: &str) -> QuestCheck {
        debug!(
            "checking quest '{}': room={room_name:?} required_room={:?} inventory={inventory:?} required_items={:?}",
            self.description, self.required_location, self.required_items
        );
        let missing_items = self
            .required_items
            .iter()
            .filter(|required| !inventory.contains(required))
            .cloned()
            .collect();
        let wrong_location = self
            .required_location
            .as_ref()
            .filter(|required| required.as_str() != room_name)
            .cloned();
        QuestCheck {
            missing_items,
            wrong_location,
        }
    }

    /// Evaluate the predicate and mark the quest completed when it holds.
    ///
    /// Completion is terminal: a failed check never clears `completed`.
    pub fn complete(&mut self, inventory: &[String], room_name: &str) -> QuestCheck {
        let check = self.check(inventory, room_name);
        if check.is_satisfied() {
            self.completed = true;
        }
        check
    }

    pub fn status(&self) -> &'static str {
        if self.completed { "Completed" } else { "Not completed" }
    }
}

/// Outcome of a quest check: what (if anything) is still missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestCheck {
    pub missing_items: Vec<String>,
    /// The required room, present only when the player is somewhere else.
    pub wrong_location: Option<String>,
}

impl QuestCheck {
    pub fn is_satisfied(&self) -> bool {
        self.missing_items.is_empty() && self.wrong_location.is_none()
    }

    /// Player-facing text for this outcome.
    ///
    /// Each failure clause starts with a single space, so the text reads on as a
    /// continuation of the line it is appended to.
    pub fn report(&self, description: &str) -> String {
        if self.is_satisfied() {
            return format!("Quest completed: {description}");
        }
        let mut text = String::new();
        if !self.missing_items.is_empty() {
            text.push_str(&format!(
                " You need the following items to complete the quest: {}.",
                self.missing_items.join(", ")
            ));
        }
        if let Some(location) = &self.wrong_location {
            text.push_str(&format!(" You need to be in the {location} to complete this quest."));
        }
        text
    }
}
