//! Then steps for command dispatch BDD scenarios.

use super::world::DispatchWorld;
use rstest_bdd_macros::then;
use tuinbot::command::domain::{DispatchError, ReplyContent};
use tuinbot::command::services::{DispatchOutcome, MessageOutcome};

fn last_text(world: &DispatchWorld) -> Result<String, eyre::Report> {
    world
        .scheduler
        .last_reply_text()
        .ok_or_else(|| eyre::eyre!("expected a text reply"))
}

#[then(r#"the bot replies "{text}""#)]
fn bot_replies(world: &DispatchWorld, text: String) -> Result<(), eyre::Report> {
    let replies = world.scheduler.replies();
    if replies.len() != 1 {
        return Err(eyre::eyre!("expected exactly one reply, got {replies:?}"));
    }
    let reply = last_text(world)?;
    if reply != text {
        return Err(eyre::eyre!("expected reply '{text}', got '{reply}'"));
    }
    Ok(())
}

#[then(r#"the reply mentions "{fragment}""#)]
fn reply_mentions(world: &DispatchWorld, fragment: String) -> Result<(), eyre::Report> {
    let reply = last_text(world)?;
    if !reply.contains(&fragment) {
        return Err(eyre::eyre!("expected '{fragment}' in reply '{reply}'"));
    }
    Ok(())
}

#[then("no syntax accepted the input")]
fn no_syntax_accepted(world: &DispatchWorld) -> Result<(), eyre::Report> {
    let outcome = world
        .last_outcome
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no message was typed"))?;
    if !matches!(
        outcome,
        MessageOutcome::Command(DispatchOutcome::Rejected(DispatchError::NoMatchingSyntax))
    ) {
        return Err(eyre::eyre!("expected no matching syntax, got {outcome:?}"));
    }
    Ok(())
}

#[then(r#"the bot shows a help page titled "{title}""#)]
fn help_page_titled(world: &DispatchWorld, title: String) -> Result<(), eyre::Report> {
    let replies = world.scheduler.replies();
    let Some(ReplyContent::Rich(help)) = replies.last().map(|reply| &reply.content) else {
        return Err(eyre::eyre!("expected a rich help page, got {replies:?}"));
    };
    if help.title != title {
        return Err(eyre::eyre!("expected title '{title}', got '{}'", help.title));
    }
    Ok(())
}

#[then("the message reaches the message hooks")]
fn reaches_hooks(world: &DispatchWorld) -> Result<(), eyre::Report> {
    match &world.last_outcome {
        Some(MessageOutcome::Hooks { consumed: false }) => Ok(()),
        other => Err(eyre::eyre!("expected hooks to run, got {other:?}")),
    }
}
