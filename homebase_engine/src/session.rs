//! A single play session.
//!
//! [`Session`] owns the world, the player and the progress store, and is the headless entry
//! point for commands: feed it a line, get back a [`Reply`]. Nothing here touches the
//! terminal.

use log::{info, warn};
use thiserror::Error;

use crate::command::parse_command;
use crate::repl::{Reply, dispatch_command};
use crate::room::Room;
use crate::store::QuestRecord;
use crate::{Id, Player, ProgressStore, QuestRecheck, StoreError, World};

/// Failures that abort a single command. The session stays usable afterwards.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Progress could not be written; the in-memory change has already happened.
    #[error("failed to save progress: {0}")]
    Store(#[from] StoreError),
    #[error("player is in an unknown room ({0})")]
    UnknownRoom(Id),
}

pub struct Session {
    pub world: World,
    pub player: Player,
    pub quest_recheck: QuestRecheck,
    store: Box<dyn ProgressStore>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("world", &self.world.title)
            .field("player", &self.player)
            .field("quest_recheck", &self.quest_recheck)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Start fresh in the world's start room, ignoring anything already in `store`.
    pub fn new(world: World, store: Box<dyn ProgressStore>, quest_recheck: QuestRecheck) -> Self {
        let player = Player::new(world.start_room.clone());
        Self {
            world,
            player,
            quest_recheck,
            store,
        }
    }

    /// Start in the world's start room, restoring inventory and quests from `store`.
    ///
    /// Restored items are removed from the rooms they were authored in, so nothing can be
    /// picked up twice across runs.
    pub fn open(world: World, store: Box<dyn ProgressStore>, quest_recheck: QuestRecheck) -> Self {
        let mut session = Self::new(world, store, quest_recheck);

        let inventory = session.store.load_inventory();
        for item in &inventory {
            if session.world.remove_item_anywhere(item).is_none() {
                warn!("restored item '{item}' was not found in any room");
            }
        }
        session.player.inventory = inventory;

        for record in session.store.load_quests() {
            let template = session.world.quest_template(&record.description);
            if template.is_none() {
                warn!("restored quest '{}' is not offered anywhere in this world", record.description);
            }
            let quest = record.into_quest(template);
            session.player.quests.insert(quest.description.clone(), quest);
        }

        info!(
            "session opened: {} items carried, {} quests accepted",
            session.player.inventory.len(),
            session.player.quests.len()
        );
        session
    }

    /// Parse and run one line of player input.
    ///
    /// # Errors
    /// - if progress could not be saved (the command's in-memory effect stands)
    /// - if the player's location is not a room in this world
    pub fn execute(&mut self, input: &str) -> Result<Reply, SessionError> {
        let command = parse_command(input);
        dispatch_command(self, &command)
    }

    /// The room the player is standing in.
    ///
    /// # Errors
    /// - if the player's location id isn't in the world
    pub fn current_room(&self) -> Result<&Room, SessionError> {
        self.world
            .room(&self.player.location)
            .ok_or_else(|| SessionError::UnknownRoom(self.player.location.clone()))
    }

    /// Mutable access to the player's room.
    ///
    /// # Errors
    /// - if the player's location id isn't in the world
    pub fn current_room_mut(&mut self) -> Result<&mut Room, SessionError> {
        let location = &self.player.location;
        self.world
            .room_mut(location)
            .ok_or_else(|| SessionError::UnknownRoom(location.clone()))
    }

    /// Description of the player's room.
    ///
    /// # Errors
    /// - if the player's location id isn't in the world
    pub fn look(&self) -> Result<String, SessionError> {
        Ok(self.current_room()?.describe(&self.world))
    }

    /// Run the completion check for an accepted quest, saving the quest log when it passes.
    ///
    /// Returns `None` if the player was never given the quest.
    ///
    /// # Errors
    /// - if the player's location is unknown, or the quest log could not be saved
    pub fn check_quest(&mut self, description: &str) -> Result<Option<String>, SessionError> {
        let room_name = self.current_room()?.name.clone();
        let Some(quest) = self.player.quests.get_mut(description) else {
            return Ok(None);
        };
        let check = quest.complete(&self.player.inventory, &room_name);
        let report = check.report(description);
        if check.is_satisfied() {
            info!("quest '{description}' completed in {room_name}");
            self.persist_quests()?;
        }
        Ok(Some(report))
    }

    /// Write the full inventory to the store.
    ///
    /// # Errors
    /// - if the store rejects the write
    pub fn persist_inventory(&mut self) -> Result<(), SessionError> {
        self.store.save_inventory(&self.player.inventory)?;
        Ok(())
    }

    /// Write every accepted quest to the store.
    ///
    /// # Errors
    /// - if the store rejects the write
    pub fn persist_quests(&mut self) -> Result<(), SessionError> {
        let records: Vec<QuestRecord> = self.player.quests.values().map(QuestRecord::from).collect();
        self.store.save_quests(&records)?;
        Ok(())
    }

    pub fn store(&self) -> &dyn ProgressStore {
        self.store.as_ref()
    }
}
