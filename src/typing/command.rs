//! The `tape` command and its typing hook.

use std::sync::Arc;

use mockable::Clock;
use tracing::{debug, warn};

use super::domain::{NewTypingMessage, TypingMessage};
use super::ports::{TypingMessageRepository, TypingStoreError};
use crate::command::domain::{
    ChannelId, ChatUser, CommandDefinition, CommandHandlerError, CommandParam, CommandSyntax,
    GuildId, Invocation, ParamConfig, ParamType, Reply, ReplyContent, RichMessage, TypingHook,
    UserId, escape_markdown, extract_links, reply_when_changed,
};
use crate::command::ports::{SideEffect, SideEffectScheduler};

/// Name the command is registered under.
pub const COMMAND_NAME: &str = "tape";

/// Longest message a member can record, in characters.
pub const MAX_MESSAGE_LENGTH: usize = 500;

const DELIVERY_COLOR: u32 = 0x17_90_7e;

impl From<TypingStoreError> for CommandHandlerError {
    fn from(error: TypingStoreError) -> Self {
        Self::Persistence(error.to_string())
    }
}

/// Typing message command.
pub struct TypingMessageCommand<R, C> {
    repository: Arc<R>,
    clock: Arc<C>,
    max_messages_per_target: usize,
}

impl<R, C> TypingMessageCommand<R, C>
where
    R: TypingMessageRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    /// Creates the command over a typing message store.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>, max_messages_per_target: usize) -> Self {
        Self {
            repository,
            clock,
            max_messages_per_target,
        }
    }

    /// Builds the command definition, with this command as its typing hook.
    #[must_use]
    pub fn definition(self: Arc<Self>) -> CommandDefinition {
        let user = Arc::new(CommandParam::new(
            "user",
            "A member (at least 3 characters of their name)",
            ParamType::User,
        ));
        let text = CommandParam::new(
            "message",
            "The message, in quotes if it has spaces",
            ParamType::Text,
        )
        .with_config(ParamConfig::length(Some(1), Some(MAX_MESSAGE_LENGTH)));

        let record = Arc::clone(&self);
        let remove = Arc::clone(&self);
        let show = Arc::clone(&self);

        CommandDefinition::new(
            COMMAND_NAME,
            "Shows a message to a member the next time they start typing.",
        )
        .with_details(format!(
            "The message only shows up in the channel where the command was typed. \
             You can leave 1 message per member, and a member can have at most {} \
             message(s) waiting for them.",
            self.max_messages_per_target
        ))
        .with_syntax(
            CommandSyntax::new("Record a message", move |invocation| {
                record.record_message(invocation)
            })
            .with_param(Arc::clone(&user))
            .with_param(text),
        )
        .with_syntax(
            CommandSyntax::new("Remove your message", move |invocation| {
                remove.remove_message(invocation)
            })
            .with_param(Arc::clone(&user))
            .with_param(CommandParam::keyword("stop")),
        )
        .with_syntax(
            CommandSyntax::new("Check your message", move |invocation| {
                show.show_message(invocation)
            })
            .with_param(user),
        )
        .with_typing_hook(self)
    }

    fn record_message(&self, invocation: &Invocation<'_>) -> Result<Reply, CommandHandlerError> {
        let guild_id = invocation.guild_id()?;
        let message = invocation.message();
        let target = invocation.user(0)?;
        let text = invocation.text(1)?;
        let name = escape_markdown(&target.display_name);

        let count = self.repository.count_for_target(
            guild_id,
            target.id,
            Some(message.author.id),
        )?;
        if count >= self.max_messages_per_target {
            return Ok(Reply::text(format!(
                "Oops, **{name}** already has {count} message(s) waiting, you'll have to wait your turn!"
            )));
        }

        let recorded = TypingMessage::new(
            NewTypingMessage {
                guild_id,
                channel_id: message.channel_id,
                author_id: message.author.id,
                author_name: message.author.display_name.clone(),
                target_id: target.id,
                content: single_line(text),
            },
            &*self.clock,
        );
        let changed = self.repository.upsert(&recorded)?;
        Ok(reply_when_changed(changed, || {
            Reply::text(format!("Message recorded for **{name}**!"))
        }))
    }

    fn remove_message(&self, invocation: &Invocation<'_>) -> Result<Reply, CommandHandlerError> {
        let guild_id = invocation.guild_id()?;
        let target = invocation.user(0)?;

        let changed =
            self.repository
                .remove(guild_id, invocation.message().author.id, target.id)?;
        Ok(reply_when_changed(changed, || {
            Reply::text(format!(
                "Message for **{}** deleted!",
                escape_markdown(&target.display_name)
            ))
        }))
    }

    fn show_message(&self, invocation: &Invocation<'_>) -> Result<Reply, CommandHandlerError> {
        let guild_id = invocation.guild_id()?;
        let target = invocation.user(0)?;
        let name = escape_markdown(&target.display_name);

        let stored =
            self.repository
                .content(guild_id, invocation.message().author.id, target.id)?;
        let text = match stored {
            Some(content) => format!("Message recorded for **{name}**: {content}"),
            None => format!("No message recorded for **{name}**!"),
        };
        Ok(Reply::text(text))
    }
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The post delivering a recorded message to its target.
fn delivery(message: &TypingMessage, target: UserId) -> RichMessage {
    let extract = extract_links(message.content());
    let mut description = String::new();
    if !extract.text.is_empty() {
        description.push_str(&format!("**{}** ", extract.text));
    }
    description.push_str(&format!("<@{target}>"));
    for link in &extract.links {
        description.push('\n');
        description.push_str(link);
    }
    RichMessage::new("", description, DELIVERY_COLOR)
        .with_footer(format!("Signed {}", message.author_name()))
}

impl<R, C> TypingHook for TypingMessageCommand<R, C>
where
    R: TypingMessageRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    fn on_typing(
        &self,
        guild_id: GuildId,
        channel_id: ChannelId,
        user: &ChatUser,
        effects: &dyn SideEffectScheduler,
    ) {
        let waiting = match self.repository.take_for(guild_id, channel_id, user.id) {
            Ok(waiting) => waiting,
            Err(error) => {
                warn!(%error, user_id = %user.id, "failed to load typing messages");
                return;
            }
        };

        for message in waiting {
            debug!(author_id = %message.author_id(), target_id = %user.id, "delivering typing message");
            effects.schedule(SideEffect::Post {
                channel_id,
                content: ReplyContent::Rich(delivery(&message, user.id)),
                replacing: None,
            });
        }
    }
}
