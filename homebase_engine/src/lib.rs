#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const HOMEBASE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Stable identifier for rooms, shared with the authored data model.
pub use homebase_data::Id;

// Core modules
pub mod command;
pub mod config;
pub mod data_paths;
pub mod item;
pub mod loader;
pub mod player;
pub mod quest;
pub mod repl;
pub mod room;
pub mod session;
pub mod store;
pub mod style;
pub mod world;

// Re-exports for convenience
pub use config::EngineConfig;
pub use loader::load_world;
pub use player::Player;
pub use quest::{Quest, QuestCheck, QuestRecheck};
pub use repl::{Reply, run_repl};
pub use room::Room;
pub use session::{Session, SessionError};
pub use store::{JsonFileStore, MemoryStore, ProgressStore, StoreError};
pub use world::{World, WorldBuilder, WorldError};
