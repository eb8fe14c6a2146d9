//! Automatic reactions from the `reac` command to their delivery.

use std::io;

use crate::in_memory::helpers::{TestBot, alicia, runtime, settle, tester};
use rstest::rstest;
use tokio::runtime::Runtime;
use tuinbot::command::domain::{ChatUser, UserId};
use tuinbot::command::services::MessageOutcome;

#[rstest]
fn target_messages_receive_every_reaction_in_order(
    runtime: io::Result<Runtime>,
) -> eyre::Result<()> {
    let rt = runtime?;
    let mut bot = TestBot::new(&rt)?;
    let bob = ChatUser::new(UserId::new(5), "Bob", "bob");

    let _added = bot.post(tester(), "!reac alicia 🦀");
    let _added = bot.post(bob, "!reac alicia 👀");
    let (message, outcome) = bot.post(alicia(), "good morning");
    settle(&rt);

    assert_eq!(outcome, MessageOutcome::Hooks { consumed: false });
    assert_eq!(
        bot.sink.reactions(),
        vec![
            (message.reference(), "🦀".to_owned()),
            (message.reference(), "👀".to_owned()),
        ]
    );
    Ok(())
}

#[rstest]
fn removed_reactions_are_no_longer_delivered(runtime: io::Result<Runtime>) -> eyre::Result<()> {
    let rt = runtime?;
    let mut bot = TestBot::new(&rt)?;

    let _added = bot.post(tester(), "!reac alicia 🦀");
    settle(&rt);
    let _removed = bot.post(alicia(), "!reac stop");
    let _message = bot.post(alicia(), "anyone around?");
    settle(&rt);

    assert!(bot.sink.reactions().is_empty());
    let texts: Vec<String> = bot
        .sink
        .sent()
        .iter()
        .filter_map(|reply| reply.content.as_text().map(str::to_owned))
        .collect();
    assert_eq!(
        texts,
        vec![
            "Reaction 🦀 added to **alicia**!".to_owned(),
            "Done, the reactions others set on you are gone!".to_owned(),
        ]
    );
    Ok(())
}

#[rstest]
fn command_messages_do_not_trigger_reactions(runtime: io::Result<Runtime>) -> eyre::Result<()> {
    let rt = runtime?;
    let mut bot = TestBot::new(&rt)?;

    let _added = bot.post(tester(), "!reac alicia 🦀");
    let (_message, outcome) = bot.post(alicia(), "!reac alicia");
    settle(&rt);

    assert!(matches!(outcome, MessageOutcome::Command(_)));
    assert!(bot.sink.reactions().is_empty());
    Ok(())
}
