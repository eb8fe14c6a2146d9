//! Reply delivery and auto-deletion through the tokio scheduler.

use std::io;

use crate::in_memory::helpers::{TestBot, runtime, settle, tester};
use rstest::rstest;
use tokio::runtime::Runtime;
use tuinbot::command::domain::{ChatUser, ReplyContent, UserId};
use tuinbot::command::services::MessageOutcome;

#[rstest]
fn reply_and_trigger_are_deleted_after_the_ttl(runtime: io::Result<Runtime>) -> eyre::Result<()> {
    let rt = runtime?;
    let mut bot = TestBot::new(&rt)?;

    let (message, _outcome) = bot.post(tester(), "!reac alicia 🦀");
    settle(&rt);

    let sent = bot.sink.sent();
    let [reply] = sent.as_slice() else {
        return Err(eyre::eyre!("expected one reply, got {sent:?}"));
    };
    assert_eq!(reply.to, message.reference());
    assert_eq!(
        reply.content.as_text(),
        Some("Reaction 🦀 added to **alicia**!")
    );
    assert_eq!(bot.sink.deleted(), vec![reply.reply, message.reference()]);
    Ok(())
}

#[rstest]
fn help_pages_stay_up_for_their_own_ttl(runtime: io::Result<Runtime>) -> eyre::Result<()> {
    let rt = runtime?;
    let mut bot = TestBot::new(&rt)?;

    let (_message, outcome) = bot.post(tester(), "!reac");
    settle(&rt);

    assert!(matches!(outcome, MessageOutcome::Command(_)));
    let sent = bot.sink.sent();
    let [reply] = sent.as_slice() else {
        return Err(eyre::eyre!("expected one reply, got {sent:?}"));
    };
    assert!(matches!(&reply.content, ReplyContent::Rich(help) if help.title.contains("reac")));
    assert!(bot.sink.deleted().is_empty());
    Ok(())
}

#[rstest]
fn overview_lists_every_command(runtime: io::Result<Runtime>) -> eyre::Result<()> {
    let rt = runtime?;
    let mut bot = TestBot::new(&rt)?;

    let (_message, _outcome) = bot.post(tester(), "!tuin");
    settle(&rt);

    let sent = bot.sink.sent();
    let Some(ReplyContent::Rich(overview)) = sent.first().map(|reply| &reply.content) else {
        return Err(eyre::eyre!("expected a rich overview, got {sent:?}"));
    };
    assert_eq!(overview.title, "Tuinbot commands");
    assert!(overview.description.contains("!reac: "));
    assert!(overview.description.contains("!tuin: "));
    Ok(())
}

#[rstest]
fn bots_get_no_answer(runtime: io::Result<Runtime>) -> eyre::Result<()> {
    let rt = runtime?;
    let mut bot = TestBot::new(&rt)?;
    let other_bot = ChatUser::new(UserId::new(99), "Robot", "robot").as_bot();

    let (_message, outcome) = bot.post(other_bot, "!reac alicia 🦀");
    settle(&rt);

    assert_eq!(outcome, MessageOutcome::Ignored);
    assert!(bot.sink.sent().is_empty());
    Ok(())
}

#[rstest]
fn wrong_argument_count_replies_with_an_error(runtime: io::Result<Runtime>) -> eyre::Result<()> {
    let rt = runtime?;
    let mut bot = TestBot::new(&rt)?;

    let (_message, _outcome) = bot.post(tester(), "!reac alicia 🦀 extra");
    settle(&rt);

    let texts: Vec<String> = bot
        .sink
        .sent()
        .iter()
        .filter_map(|reply| reply.content.as_text().map(str::to_owned))
        .collect();
    assert_eq!(texts.len(), 1);
    assert!(texts.iter().all(|text| text.contains("!reac")));
    assert!(bot.sink.reactions().is_empty());
    Ok(())
}
