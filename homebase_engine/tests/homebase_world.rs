//! Scenarios played against the shipped world file.

use std::fs;
use std::path::{Path, PathBuf};

use homebase_engine::store::{QuestRecord, parse_quest_file};
use homebase_engine::*;
use tempfile::{TempDir, tempdir};

const BLUGLO_QUEST: &str = "Put Bluglo in the furnace in the Power Room";
const RAY_DIALOGUE: &str = "Ray says: 'Welcome to the Command Center! What can I help you with?'";

fn world_file() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data/world.ron")
}

fn shipped_world() -> World {
    load_world(&EngineConfig::default().with_world_file(world_file())).unwrap()
}

fn file_session(dir: &TempDir, policy: QuestRecheck) -> Session {
    Session::open(shipped_world(), Box::new(JsonFileStore::in_dir(dir.path())), policy)
}

fn say(session: &mut Session, line: &str) -> String {
    session.execute(line).unwrap().text().unwrap().to_string()
}

fn walk(session: &mut Session, directions: &[&str]) {
    for direction in directions {
        let reply = say(session, &format!("move {direction}"));
        assert!(reply.starts_with("You move"), "{direction}: {reply}");
    }
}

#[test]
fn shipped_world_loads() {
    let world = shipped_world();
    assert_eq!(world.start_room, "command_center");
    assert_eq!(world.rooms.len(), 20);
    assert_eq!(
        world.describe("command_center").unwrap(),
        "You are in Command Center. This is where you manage your missions.\n\
         Characters: Ray\nItems: mission briefing\nExits: South to Hallway"
    );
    let hallways = world.rooms.values().filter(|room| room.name == "Hallway").count();
    assert_eq!(hallways, 5);
}

#[test]
fn opening_scenario() {
    let dir = tempdir().unwrap();
    let mut session = file_session(&dir, QuestRecheck::default());
    assert_eq!(say(&mut session, "take mission briefing"), "You picked up the mission briefing.");
    assert_eq!(
        say(&mut session, "talk ray"),
        format!(
            "{RAY_DIALOGUE}\nQuest: {BLUGLO_QUEST}\n You need the following items to complete the quest: Bluglo. \
             You need to be in the Power Room to complete this quest."
        )
    );
    assert_eq!(say(&mut session, "inventory"), "You are carrying: mission briefing");
}

#[test]
fn bluglo_quest_completes_and_is_saved() {
    let dir = tempdir().unwrap();
    let mut session = file_session(&dir, QuestRecheck::default());
    say(&mut session, "talk ray");
    walk(&mut session, &["south", "south", "east"]);
    assert_eq!(say(&mut session, "take bluglo"), "You picked up the Bluglo.");
    walk(&mut session, &["west", "south"]);
    assert_eq!(session.player.location_name(&session.world), Some("Power Room"));

    assert_eq!(
        say(&mut session, &format!("quest {}", BLUGLO_QUEST.to_lowercase())),
        "You have not been given this quest."
    );
    assert_eq!(
        say(&mut session, "quest put Bluglo in the furnace in the Power Room"),
        format!("Quest completed: {BLUGLO_QUEST}")
    );

    let saved = parse_quest_file(&fs::read_to_string(dir.path().join("quests.json")).unwrap()).unwrap();
    assert_eq!(
        saved,
        vec![QuestRecord {
            description: BLUGLO_QUEST.to_string(),
            completed: true,
            item_required: Some(vec!["Bluglo".to_string()]),
            location_required: Some("Power Room".to_string()),
        }]
    );
}

#[test]
fn furnace_cannot_be_taken() {
    let dir = tempdir().unwrap();
    let mut session = file_session(&dir, QuestRecheck::default());
    walk(&mut session, &["south", "south", "south"]);
    assert_eq!(say(&mut session, "take Furnace"), "You can't pick up the furnace.");
    assert!(session.player.inventory.is_empty());
    assert!(!dir.path().join("inventory.json").exists());
}

#[test]
fn far_hallway_has_no_way_back() {
    let dir = tempdir().unwrap();
    let mut session = file_session(&dir, QuestRecheck::default());
    walk(&mut session, &["south", "south", "west", "west", "west"]);
    assert_eq!(session.player.location, "hallway_5");
    assert_eq!(say(&mut session, "move east"), "You can't go that way!");
}

#[test]
fn progress_survives_restart() {
    let dir = tempdir().unwrap();
    {
        let mut session = file_session(&dir, QuestRecheck::default());
        say(&mut session, "take mission briefing");
        say(&mut session, "talk ray");
        assert!(session.execute("quit").unwrap().is_quit());
    }

    let mut session = file_session(&dir, QuestRecheck::default());
    assert_eq!(session.player.location, "command_center");
    assert_eq!(session.player.inventory, vec!["mission briefing".to_string()]);
    assert!(session.player.has_quest(BLUGLO_QUEST));
    assert_eq!(say(&mut session, "take mission briefing"), "There's no mission briefing here.");
}

#[test]
fn legacy_quest_file_is_upgraded() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("quests.json"),
        format!(r#"{{"{BLUGLO_QUEST}": false, "Retired quest": true}}"#),
    )
    .unwrap();

    let mut session = file_session(&dir, QuestRecheck::default());
    assert_eq!(session.player.quests.len(), 2);
    assert!(session.player.quests["Retired quest"].completed);
    assert_eq!(
        say(&mut session, "quest Put Bluglo in the furnace in the Power Room"),
        " You need the following items to complete the quest: Bluglo. \
         You need to be in the Power Room to complete this quest."
    );

    // the next write uses the array form
    session.persist_quests().unwrap();
    let raw = fs::read_to_string(dir.path().join("quests.json")).unwrap();
    assert!(raw.trim_start().starts_with('['));
}

#[test]
fn talk_ignores_name_casing() {
    let dir = tempdir().unwrap();
    let mut session = file_session(&dir, QuestRecheck::default());
    assert!(say(&mut session, "talk RAY").starts_with(RAY_DIALOGUE));
    assert!(session.player.has_quest(BLUGLO_QUEST));
}

#[test]
fn unreadable_inventory_file_restores_nothing() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("inventory.json"), r#"{"not": "an array"}"#).unwrap();
    let session = file_session(&dir, QuestRecheck::default());
    assert!(session.player.inventory.is_empty());
    assert_eq!(
        session.world.room("command_center").unwrap().items,
        vec!["mission briefing".to_string()]
    );
    let lab = session.world.room("lars_lab").unwrap();
    assert_eq!(lab.items, vec!["Bluglo".to_string(), "Llama body".to_string()]);
}

#[test]
fn scalar_quest_file_loads_empty() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("quests.json"), "42").unwrap();
    let session = file_session(&dir, QuestRecheck::default());
    assert!(session.player.quests.is_empty());
}

#[test]
fn recheck_policies() {
    for (policy, expected) in [
        (
            QuestRecheck::Reevaluate,
            format!(
                "{RAY_DIALOGUE}\nQuest: {BLUGLO_QUEST}\n You need to be in the Power Room to complete this quest."
            ),
        ),
        (QuestRecheck::SuppressCompleted, format!("{RAY_DIALOGUE}\nQuest Status: Already completed.")),
    ] {
        let dir = tempdir().unwrap();
        let mut session = file_session(&dir, policy);
        say(&mut session, "talk ray");
        session.player.inventory.push("Bluglo".into());
        session.player.location = "power_room".into();
        say(&mut session, "quest Put Bluglo in the furnace in the Power Room");
        session.player.location = "command_center".into();
        assert_eq!(say(&mut session, "talk ray"), expected);
        assert!(session.player.quests[BLUGLO_QUEST].completed);
    }
}
