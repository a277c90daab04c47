//! Progress persistence.
//!
//! Two JSON files survive between runs: the inventory (an array of item names) and the quest
//! log. The quest log has a legacy shape (object of description -> completed) and the
//! current shape (array of quest records); both are read, only the current one is written.
//!
//! Every write replaces the whole file through a temporary sibling and a rename, so a
//! failed write leaves the previous contents intact.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::Quest;

pub const INVENTORY_FILE: &str = "inventory.json";
pub const QUESTS_FILE: &str = "quests.json";

/// Failures while reading or writing progress files.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unrecognized quest file format (expected array or object, found {0})")]
    UnrecognizedFormat(&'static str),
    #[error("store is read-only")]
    ReadOnly,
}

/// One quest as persisted in the current (array) format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestRecord {
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub item_required: Option<Vec<String>>,
    #[serde(default)]
    pub location_required: Option<String>,
}

impl QuestRecord {
    /// Legacy entries carry nothing but the completion flag.
    fn legacy(description: String, completed: bool) -> Self {
        Self {
            description,
            completed,
            item_required: None,
            location_required: None,
        }
    }

    /// Rebuild a [`Quest`] from this record.
    ///
    /// Requirements the record doesn't carry are taken from `template` (the authored quest
    /// with the same description) when there is one, otherwise left empty.
    pub fn into_quest(self, template: Option<&Quest>) -> Quest {
        let required_items = match (self.item_required, template) {
            (Some(items), _) => items,
            (None, Some(template)) => template.required_items.clone(),
            (None, None) => Vec::new(),
        };
        let required_location = self
            .location_required
            .or_else(|| template.and_then(|t| t.required_location.clone()));
        let mut quest = Quest::new(self.description).with_items(required_items);
        quest.required_location = required_location;
        quest.completed = self.completed;
        quest
    }
}

impl From<&Quest> for QuestRecord {
    fn from(quest: &Quest) -> Self {
        Self {
            description: quest.description.clone(),
            completed: quest.completed,
            item_required: Some(quest.required_items.clone()),
            location_required: quest.required_location.clone(),
        }
    }
}

/// Load/save boundary for session progress.
///
/// Loading never fails: missing or unreadable data means "no prior progress".
pub trait ProgressStore {
    fn load_inventory(&self) -> Vec<String>;
    /// # Errors
    /// Returns an error if the inventory could not be written.
    fn save_inventory(&mut self, inventory: &[String]) -> Result<(), StoreError>;
    fn load_quests(&self) -> Vec<QuestRecord>;
    /// # Errors
    /// Returns an error if the quest log could not be written.
    fn save_quests(&mut self, quests: &[QuestRecord]) -> Result<(), StoreError>;
}

/// Parse quest log contents in either supported format.
///
/// # Errors
/// - if the text isn't JSON
/// - if the JSON is neither an array of records nor an object of booleans
pub fn parse_quest_file(raw: &str) -> Result<Vec<QuestRecord>, StoreError> {
    match serde_json::from_str::<Value>(raw)? {
        Value::Array(entries) => entries
            .into_iter()
            .map(|entry| serde_json::from_value::<QuestRecord>(entry).map_err(StoreError::from))
            .collect(),
        Value::Object(map) => map
            .into_iter()
            .map(|(description, completed)| match completed {
                Value::Bool(done) => Ok(QuestRecord::legacy(description, done)),
                _ => Err(StoreError::UnrecognizedFormat("non-boolean legacy entry")),
            })
            .collect(),
        Value::Null => Err(StoreError::UnrecognizedFormat("null")),
        Value::Bool(_) => Err(StoreError::UnrecognizedFormat("boolean")),
        Value::Number(_) => Err(StoreError::UnrecognizedFormat("number")),
        Value::String(_) => Err(StoreError::UnrecognizedFormat("string")),
    }
}

/// JSON files on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    inventory_path: PathBuf,
    quests_path: PathBuf,
}

impl JsonFileStore {
    pub fn new(inventory_path: impl Into<PathBuf>, quests_path: impl Into<PathBuf>) -> Self {
        Self {
            inventory_path: inventory_path.into(),
            quests_path: quests_path.into(),
        }
    }

    /// Store using the default file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(INVENTORY_FILE), dir.join(QUESTS_FILE))
    }

    pub fn inventory_path(&self) -> &Path {
        &self.inventory_path
    }

    pub fn quests_path(&self) -> &Path {
        &self.quests_path
    }
}

impl ProgressStore for JsonFileStore {
    fn load_inventory(&self) -> Vec<String> {
        let Some(raw) = read_optional(&self.inventory_path) else {
            return Vec::new();
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(items) => {
                info!("loaded {} inventory items from {}", items.len(), self.inventory_path.display());
                items
            },
            Err(err) => {
                warn!(
                    "inventory file {} is not a JSON array of strings ({err}); starting empty",
                    self.inventory_path.display()
                );
                Vec::new()
            },
        }
    }

    fn save_inventory(&mut self, inventory: &[String]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(inventory)?;
        write_replace(&self.inventory_path, &json)?;
        info!("saved {} inventory items to {}", inventory.len(), self.inventory_path.display());
        Ok(())
    }

    fn load_quests(&self) -> Vec<QuestRecord> {
        let Some(raw) = read_optional(&self.quests_path) else {
            return Vec::new();
        };
        match parse_quest_file(&raw) {
            Ok(records) => {
                info!("loaded {} quests from {}", records.len(), self.quests_path.display());
                records
            },
            Err(err) => {
                warn!("invalid quest data in {} ({err}); starting with no quests", self.quests_path.display());
                Vec::new()
            },
        }
    }

    fn save_quests(&mut self, quests: &[QuestRecord]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(quests)?;
        write_replace(&self.quests_path, &json)?;
        info!("saved {} quests to {}", quests.len(), self.quests_path.display());
        Ok(())
    }
}

/// Read a file, treating "not found" as absent. Other read failures are logged and also
/// treated as absent.
fn read_optional(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(raw) => Some(raw),
        Err(err) if err.kind() == io::ErrorKind::NotFound => None,
        Err(err) => {
            warn!("failed to read {}: {err}", path.display());
            None
        },
    }
}

/// Replace `path` with `contents` in one step.
fn write_replace(path: &Path, contents: &str) -> Result<(), StoreError> {
    let io_err = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir).map_err(io_err)?;
    }
    let mut tmp_name = path.file_name().map(|name| name.to_os_string()).unwrap_or_default();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);
    fs::write(&tmp_path, contents).map_err(io_err)?;
    fs::rename(&tmp_path, path).map_err(|err| {
        let _ = fs::remove_file(&tmp_path);
        io_err(err)
    })
}

/// In-memory store for headless sessions and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub inventory: Vec<String>,
    pub quests: Vec<QuestRecord>,
    /// Number of successful writes of either kind.
    pub writes: usize,
    /// Reject every write with [`StoreError::ReadOnly`].
    pub read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }
}

impl ProgressStore for MemoryStore {
    fn load_inventory(&self) -> Vec<String> {
        self.inventory.clone()
    }

    fn save_inventory(&mut self, inventory: &[String]) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::ReadOnly);
        }
        self.inventory = inventory.to_vec();
        self.writes += 1;
        Ok(())
    }

    fn load_quests(&self) -> Vec<QuestRecord> {
        self.quests.clone()
    }

    fn save_quests(&mut self, quests: &[QuestRecord]) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::ReadOnly);
        }
        self.quests = quests.to_vec();
        self.writes += 1;
        Ok(())
    }
}
