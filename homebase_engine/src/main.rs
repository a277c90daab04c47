#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Homebase **
//! Text adventure around the homebase.

use homebase_engine::config::CONFIG_FILE;
use homebase_engine::style::GameStyle;
use homebase_engine::{EngineConfig, Session, load_world, run_repl};

use anyhow::{Context, Result};
use log::info;

use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config_path = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(CONFIG_FILE), PathBuf::from);
    let config = EngineConfig::load(&config_path).context("while loading engine config")?;

    info!("Start: loading Homebase world...");
    let world = load_world(&config).context("while loading World")?;
    info!("World loaded successfully.");

    let store = config.open_store();
    info!(
        "progress files: {} and {}",
        store.inventory_path().display(),
        store.quests_path().display()
    );
    let mut session = Session::open(world, Box::new(store), config.quest_recheck);

    println!("{:^84}", session.world.title.to_uppercase().banner_style());
    if !session.world.intro.is_empty() {
        println!("\n{}\n", session.world.intro.description_style());
    }

    run_repl(&mut session)
}
