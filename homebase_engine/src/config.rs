//! Engine configuration.
//!
//! Settings come from an optional `homebase.toml`. Every field has a default, so a missing
//! file (or a file that sets only some keys) is fine; a file that can't be parsed is not.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

use crate::QuestRecheck;
use crate::data_paths::data_path;
use crate::store::{INVENTORY_FILE, JsonFileStore, QUESTS_FILE};

/// Config file looked up in the working directory when no path is given.
pub const CONFIG_FILE: &str = "homebase.toml";

/// Where the world and the saved progress live, and how quests are re-checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Authored world file (RON).
    pub world_file: PathBuf,
    /// Directory holding the progress files.
    pub save_dir: PathBuf,
    pub inventory_file: String,
    pub quests_file: String,
    pub quest_recheck: QuestRecheck,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            world_file: data_path("world.ron"),
            save_dir: default_save_dir(),
            inventory_file: INVENTORY_FILE.to_string(),
            quests_file: QUESTS_FILE.to_string(),
            quest_recheck: QuestRecheck::default(),
        }
    }
}

impl EngineConfig {
    /// Read settings from `path`, falling back to defaults if the file doesn't exist.
    ///
    /// # Errors
    /// - if the file exists but can't be read or parsed
    pub fn load(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!("no config at '{}', using defaults", path.display());
                return Ok(Self::default());
            },
            Err(err) => return Err(err).with_context(|| format!("reading config from '{}'", path.display())),
        };
        let config: Self =
            toml::from_str(&text).with_context(|| format!("parsing config TOML from '{}'", path.display()))?;
        info!("config loaded from '{}'", path.display());
        Ok(config)
    }

    /// Set the world file.
    #[must_use]
    pub fn with_world_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.world_file = path.into();
        self
    }

    /// Set the directory progress files are kept in.
    #[must_use]
    pub fn with_save_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.save_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_quest_recheck(mut self, policy: QuestRecheck) -> Self {
        self.quest_recheck = policy;
        self
    }

    pub fn inventory_path(&self) -> PathBuf {
        self.save_dir.join(&self.inventory_file)
    }

    pub fn quests_path(&self) -> PathBuf {
        self.save_dir.join(&self.quests_file)
    }

    /// A file-backed progress store at the configured paths.
    pub fn open_store(&self) -> JsonFileStore {
        JsonFileStore::new(self.inventory_path(), self.quests_path())
    }
}

fn default_save_dir() -> PathBuf {
    dirs::data_dir()
        .or_else(dirs::data_local_dir)
        .map_or_else(|| PathBuf::from("saved_games"), |base| base.join("homebase_engine"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn default_config() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.inventory_file, "inventory.json");
        assert_eq!(cfg.quests_file, "quests.json");
        assert_eq!(cfg.quest_recheck, QuestRecheck::Reevaluate);
        assert!(cfg.world_file.ends_with("world.ron"));
    }

    #[test]
    fn builder_methods() {
        let cfg = EngineConfig::default()
            .with_world_file("custom.ron")
            .with_save_dir("/tmp/saves")
            .with_quest_recheck(QuestRecheck::SuppressCompleted);
        assert_eq!(cfg.world_file, PathBuf::from("custom.ron"));
        assert_eq!(cfg.inventory_path(), PathBuf::from("/tmp/saves/inventory.json"));
        assert_eq!(cfg.quests_path(), PathBuf::from("/tmp/saves/quests.json"));
        assert_eq!(cfg.quest_recheck, QuestRecheck::SuppressCompleted);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let cfg = EngineConfig::load(&dir.path().join("homebase.toml")).unwrap();
        assert_eq!(cfg, EngineConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("homebase.toml");
        fs::write(&path, "save_dir = \"saves\"\nquest_recheck = \"suppress_completed\"\n").unwrap();
        let cfg = EngineConfig::load(&path).unwrap();
        assert_eq!(cfg.save_dir, PathBuf::from("saves"));
        assert_eq!(cfg.quest_recheck, QuestRecheck::SuppressCompleted);
        assert_eq!(cfg.quests_file, "quests.json");
    }

    #[test]
    fn unparseable_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("homebase.toml");
        fs::write(&path, "quest_recheck = \"sometimes\"").unwrap();
        assert!(EngineConfig::load(&path).is_err());
    }
}
