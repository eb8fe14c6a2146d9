//! Spoilers and typing messages from their command to their delivery.

use std::io;

use crate::in_memory::helpers::{TestBot, alicia, runtime, settle, tester};
use rstest::rstest;
use tokio::runtime::Runtime;
use tuinbot::command::domain::ReplyContent;
use tuinbot::command::services::MessageOutcome;

#[rstest]
fn spoiled_message_is_reposted_and_deleted(runtime: io::Result<Runtime>) -> eyre::Result<()> {
    let rt = runtime?;
    let mut bot = TestBot::new(&rt)?;

    let _planted = bot.post(tester(), "!spoil alicia");
    settle(&rt);
    let (message, outcome) = bot.post(alicia(), "the butler did it");
    settle(&rt);

    assert_eq!(outcome, MessageOutcome::Hooks { consumed: true });
    let posted = bot.sink.posted();
    let [post] = posted.as_slice() else {
        return Err(eyre::eyre!("expected one post, got {posted:?}"));
    };
    assert!(matches!(
        &post.content,
        ReplyContent::Rich(announcement) if announcement.description.contains("||**the butler did it**||")
    ));
    assert!(bot.sink.deleted().contains(&message.reference()));
    Ok(())
}

#[rstest]
fn spoiled_message_skips_the_reaction_hook(runtime: io::Result<Runtime>) -> eyre::Result<()> {
    let rt = runtime?;
    let mut bot = TestBot::new(&rt)?;

    let _reacted = bot.post(tester(), "!reac alicia 🦀");
    let _planted = bot.post(tester(), "!spoil alicia");
    settle(&rt);
    let _spoiled = bot.post(alicia(), "plot twist");
    settle(&rt);

    assert!(bot.sink.reactions().is_empty());
    assert_eq!(bot.sink.posted().len(), 1);
    Ok(())
}

#[rstest]
fn typing_message_is_posted_once(runtime: io::Result<Runtime>) -> eyre::Result<()> {
    let rt = runtime?;
    let mut bot = TestBot::new(&rt)?;

    let _recorded = bot.post(tester(), "!tape alicia \"happy birthday\"");
    settle(&rt);
    assert_eq!(bot.start_typing(&alicia()), 1);
    let _again = bot.start_typing(&alicia());
    settle(&rt);

    let posted = bot.sink.posted();
    let [post] = posted.as_slice() else {
        return Err(eyre::eyre!("expected one post, got {posted:?}"));
    };
    assert!(matches!(
        &post.content,
        ReplyContent::Rich(delivery) if delivery.description == "**happy birthday** <@3>"
    ));
    assert!(!bot.sink.deleted().contains(&post.message));
    Ok(())
}
