//! Loader utilities for building a [`World`] from serialized data.
//!
//! World content is loaded from the authored `WorldDef` (RON) named in the engine config.

pub mod worlddef;

use crate::loader::worlddef::{build_world_from_def, load_worlddef};

use crate::{EngineConfig, World};
use homebase_data::WorldDef;
use anyhow::{Context, Result, bail};
use log::info;

/// Load and validate the world named by `config`.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, validation, or missing references.
pub fn load_world(config: &EngineConfig) -> Result<World> {
    let worlddef = load_worlddef(&config.world_file).context("while loading worlddef from file")?;
    validate_worlddef(&worlddef)?;
    let world = build_world_from_def(&worlddef).context("while building world from worlddef")?;
    info!("{} rooms added to World", world.rooms.len());
    info!("{} catalog items added to World", world.catalog.len());
    Ok(world)
}

/// Validate the authored WorldDef and return a single aggregated error.
fn validate_worlddef(def: &WorldDef) -> Result<()> {
    let errors = homebase_data::validate_world(def);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("worlddef validation failed:\n{details}");
}
