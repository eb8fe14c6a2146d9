//! The `reac` command and its message hook.

use std::sync::Arc;

use mockable::Clock;
use tracing::warn;

use super::domain::{AutoReaction, NewAutoReaction};
use super::ports::{ReactionRepository, ReactionStoreError};
use crate::command::domain::{
    CommandDefinition, CommandHandlerError, CommandParam, CommandSyntax, HookVerdict,
    IncomingMessage, Invocation, MessageHook, ParamType, Reply, escape_markdown,
    reply_when_changed,
};
use crate::command::ports::{SideEffect, SideEffectScheduler};

/// Name the command is registered under.
pub const COMMAND_NAME: &str = "reac";

impl From<ReactionStoreError> for CommandHandlerError {
    fn from(error: ReactionStoreError) -> Self {
        Self::Persistence(error.to_string())
    }
}

/// Automatic reaction command.
pub struct AutoReactionCommand<R, C> {
    repository: Arc<R>,
    clock: Arc<C>,
    max_reactions_per_target: usize,
}

impl<R, C> AutoReactionCommand<R, C>
where
    R: ReactionRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    /// Creates the command over a reaction store.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>, max_reactions_per_target: usize) -> Self {
        Self {
            repository,
            clock,
            max_reactions_per_target,
        }
    }

    /// Builds the command definition, with this command as its message hook.
    #[must_use]
    pub fn definition(self: Arc<Self>) -> CommandDefinition {
        let user = Arc::new(CommandParam::new(
            "user",
            "A member (at least 3 characters of their name)",
            ParamType::User,
        ));
        let emoji = Arc::new(CommandParam::new(
            "emoji",
            "An emoji that will stick to them for a while",
            ParamType::Emoji,
        ));
        let stop = Arc::new(CommandParam::keyword("stop"));

        let add = Arc::clone(&self);
        let remove = Arc::clone(&self);
        let list = Arc::clone(&self);
        let remove_all = Arc::clone(&self);

        CommandDefinition::new(COMMAND_NAME, "Adds an automatic reaction under a member's messages.")
            .with_details(format!(
                "The reaction only shows up in the channel where the command was typed. \
                 You can set 1 reaction per member, and a member can carry at most {} reactions.",
                self.max_reactions_per_target
            ))
            .with_syntax(
                CommandSyntax::new("Add a reaction", move |invocation| {
                    add.add_reaction(invocation)
                })
                .with_param(Arc::clone(&user))
                .with_param(emoji),
            )
            .with_syntax(
                CommandSyntax::new("Remove your reaction", move |invocation| {
                    remove.remove_reaction(invocation)
                })
                .with_param(Arc::clone(&user))
                .with_param(Arc::clone(&stop)),
            )
            .with_syntax(
                CommandSyntax::new("Show the reactions set on a member", move |invocation| {
                    list.list_reactions(invocation)
                })
                .with_param(user),
            )
            .with_syntax(
                CommandSyntax::new("Remove every reaction others set on you", move |invocation| {
                    remove_all.remove_all_reactions(invocation)
                })
                .with_param(stop),
            )
            .with_message_hook(self)
    }

    fn add_reaction(&self, invocation: &Invocation<'_>) -> Result<Reply, CommandHandlerError> {
        let guild_id = invocation.guild_id()?;
        let message = invocation.message();
        let target = invocation.user(0)?;
        let emoji = invocation.emoji(1)?.as_str();
        let name = escape_markdown(&target.display_name);

        let count =
            self.repository
                .count_for_target(guild_id, target.id, Some(message.author.id))?;
        if count >= self.max_reactions_per_target {
            return Ok(Reply::text(format!(
                "**{name}** already carries {count} reactions, let them breathe a little."
            )));
        }

        if self
            .repository
            .exists(guild_id, message.channel_id, target.id, emoji)?
        {
            return Ok(Reply::text(format!(
                "This emoji is already on **{name}** in this channel, pick another one."
            )));
        }

        let reaction = AutoReaction::new(
            NewAutoReaction {
                guild_id,
                channel_id: message.channel_id,
                author_id: message.author.id,
                target_id: target.id,
                emoji: emoji.to_owned(),
            },
            &*self.clock,
        );
        let changed = self.repository.upsert(&reaction)?;
        Ok(reply_when_changed(changed, || {
            Reply::text(format!("Reaction {emoji} added to **{name}**!"))
        }))
    }

    fn remove_reaction(&self, invocation: &Invocation<'_>) -> Result<Reply, CommandHandlerError> {
        let guild_id = invocation.guild_id()?;
        let target = invocation.user(0)?;

        let changed =
            self.repository
                .remove(guild_id, invocation.message().author.id, target.id)?;
        Ok(reply_when_changed(changed, || {
            Reply::text(format!(
                "Reaction removed from **{}**!",
                escape_markdown(&target.display_name)
            ))
        }))
    }

    fn list_reactions(&self, invocation: &Invocation<'_>) -> Result<Reply, CommandHandlerError> {
        let guild_id = invocation.guild_id()?;
        let target = invocation.user(0)?;

        let emojis = self.repository.emojis_for(guild_id, target.id, None)?;
        let mut summary = format!(
            "**{}** has {} reaction(s)",
            escape_markdown(&target.display_name),
            emojis.len()
        );
        if !emojis.is_empty() {
            let in_channel = self.repository.count_in_channel(
                guild_id,
                invocation.message().channel_id,
                target.id,
            )?;
            summary.push_str(&format!(" ({in_channel} in this channel): {}", emojis.join(" ")));
        }
        Ok(Reply::text(summary))
    }

    fn remove_all_reactions(
        &self,
        invocation: &Invocation<'_>,
    ) -> Result<Reply, CommandHandlerError> {
        let guild_id = invocation.guild_id()?;
        let changed = self
            .repository
            .remove_all_on(guild_id, invocation.message().author.id)?;
        Ok(reply_when_changed(changed, || {
            Reply::text("Done, the reactions others set on you are gone!")
        }))
    }
}

impl<R, C> MessageHook for AutoReactionCommand<R, C>
where
    R: ReactionRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    fn on_message(
        &self,
        message: &IncomingMessage,
        effects: &dyn SideEffectScheduler,
    ) -> HookVerdict {
        let Some(guild_id) = message.guild_id else {
            return HookVerdict::Continue;
        };

        match self
            .repository
            .emojis_for(guild_id, message.author.id, Some(message.channel_id))
        {
            Ok(emojis) if !emojis.is_empty() => effects.schedule(SideEffect::React {
                to: message.reference(),
                emojis,
            }),
            Ok(_) => {}
            Err(error) => warn!(%error, message_id = %message.id, "failed to load reactions"),
        }
        HookVerdict::Continue
    }
}
