//! `repl::npc` module
//!
//! Conversations with characters, and the quests they hand out.

use crate::QuestRecheck;
use crate::repl::Reply;
use crate::session::{Session, SessionError};

use log::info;

/// Handles `talk <name>`.
///
/// A character's quest is added to the player's quest log on first conversation and then
/// checked, subject to the session's [`QuestRecheck`] policy.
///
/// # Errors
/// - if the player's room is missing, or the quest log could not be saved
pub fn talk_to_handler(session: &mut Session, name: &str) -> Result<Reply, SessionError> {
    let Some(character) = session.current_room()?.character(name) else {
        return Ok(Reply::message(format!("There's no one named {name} here.")));
    };
    let dialogue = character.dialogue.clone();
    let offered = character.quest.clone();
    info!("player talked to {name} in {}", session.player.location);

    let Some(offered) = offered else {
        return Ok(Reply::message(dialogue));
    };
    let description = offered.description.clone();

    if session.player.has_quest(&description) {
        let completed = session.player.quests.get(&description).is_some_and(|quest| quest.completed);
        if completed && session.quest_recheck == QuestRecheck::SuppressCompleted {
            return Ok(Reply::message(format!("{dialogue}\nQuest Status: Already completed.")));
        }
    } else {
        info!("quest '{description}' offered by {name}");
        session.player.quests.insert(description.clone(), offered);
        session.persist_quests()?;
    }

    let outcome = session.check_quest(&description)?.unwrap_or_default();
    Ok(Reply::message(format!("{dialogue}\nQuest: {description}\n{outcome}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryStore, ProgressStore, Quest, WorldBuilder};

    const DESC: &str = "Find the missing llama parts";

    fn session(policy: QuestRecheck) -> Session {
        let world = WorldBuilder::new("Test")
            .room("lab", "Lab", "Beakers.")
            .item("lab", "Llama leg")
            .character("lab", "Lars", "Lars says: 'Busy.'")
            .quest_giver(
                "lab",
                "Llama",
                "Llama says: 'Where are my legs?'",
                Quest::new(DESC).with_items(["Llama leg"]),
            )
            .start("lab")
            .build()
            .unwrap();
        Session::new(world, Box::new(MemoryStore::new()), policy)
    }

    #[test]
    fn plain_dialogue_without_quest() {
        let mut session = session(QuestRecheck::default());
        let reply = talk_to_handler(&mut session, "Lars").unwrap();
        assert_eq!(reply.text(), Some("Lars says: 'Busy.'"));
        assert!(session.player.quests.is_empty());
    }

    #[test]
    fn talk_ignores_name_casing() {
        let mut session = session(QuestRecheck::default());
        let reply = session.execute("talk LARS").unwrap();
        assert_eq!(reply.text(), Some("Lars says: 'Busy.'"));
        let reply = session.execute("talk lLAMA").unwrap();
        assert!(reply.text().unwrap().starts_with("Llama says"));
    }

    #[test]
    fn unknown_character() {
        let mut session = session(QuestRecheck::default());
        let reply = talk_to_handler(&mut session, "Ray").unwrap();
        assert_eq!(reply.text(), Some("There's no one named Ray here."));
    }

    #[test]
    fn first_talk_offers_and_checks_quest() {
        let mut session = session(QuestRecheck::default());
        let reply = talk_to_handler(&mut session, "Llama").unwrap();
        assert_eq!(
            reply.text().unwrap(),
            format!(
                "Llama says: 'Where are my legs?'\nQuest: {DESC}\n \
                 You need the following items to complete the quest: Llama leg."
            )
        );
        assert!(session.player.has_quest(DESC));
        assert_eq!(session.store().load_quests().len(), 1);
    }

    #[test]
    fn reevaluate_reports_completion_again() {
        let mut session = session(QuestRecheck::Reevaluate);
        session.player.inventory.push("Llama leg".into());
        talk_to_handler(&mut session, "Llama").unwrap();
        let reply = talk_to_handler(&mut session, "Llama").unwrap();
        assert!(reply.text().unwrap().ends_with(&format!("Quest completed: {DESC}")));
    }

    #[test]
    fn suppress_completed_skips_the_check() {
        let mut session = session(QuestRecheck::SuppressCompleted);
        session.player.inventory.push("Llama leg".into());
        let first = talk_to_handler(&mut session, "Llama").unwrap();
        assert!(first.text().unwrap().ends_with(&format!("Quest completed: {DESC}")));
        let second = talk_to_handler(&mut session, "Llama").unwrap();
        assert_eq!(
            second.text(),
            Some("Llama says: 'Where are my legs?'\nQuest Status: Already completed.")
        );
    }

    #[test]
    fn suppress_completed_still_checks_open_quests() {
        let mut session = session(QuestRecheck::SuppressCompleted);
        talk_to_handler(&mut session, "Llama").unwrap();
        let reply = talk_to_handler(&mut session, "Llama").unwrap();
        assert!(reply.text().unwrap().contains("\nQuest: Find the missing llama parts\n"));
    }
}
