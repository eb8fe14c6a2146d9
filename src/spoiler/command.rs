//! The `spoil` command and its message hook.

use std::sync::Arc;

use mockable::Clock;
use tracing::{debug, warn};

use super::domain::{NewSpoiler, Spoiler};
use super::ports::{SpoilerRepository, SpoilerStoreError};
use crate::command::domain::{
    CommandDefinition, CommandHandlerError, CommandParam, CommandSyntax, HookVerdict,
    IncomingMessage, Invocation, MessageHook, ParamType, Reply, ReplyContent, RichMessage,
    escape_markdown, extract_links, is_single_link, reply_when_changed,
};
use crate::command::ports::{SideEffect, SideEffectScheduler};

/// Name the command is registered under.
pub const COMMAND_NAME: &str = "spoil";

const ANNOUNCEMENT_COLOR: u32 = 0x17_90_7e;

impl From<SpoilerStoreError> for CommandHandlerError {
    fn from(error: SpoilerStoreError) -> Self {
        Self::Persistence(error.to_string())
    }
}

/// Automatic spoiler command.
pub struct AutoSpoilerCommand<R, C> {
    repository: Arc<R>,
    clock: Arc<C>,
    trigger: char,
}

impl<R, C> AutoSpoilerCommand<R, C>
where
    R: SpoilerRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    /// Creates the command over a spoiler store. Messages starting with
    /// `trigger` are commands and never get spoiled.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>, trigger: char) -> Self {
        Self {
            repository,
            clock,
            trigger,
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

        let add = Arc::clone(&self);
        let remove = Arc::clone(&self);
        let info = Arc::clone(&self);

        CommandDefinition::new(COMMAND_NAME, "Adds a spoiler on a member's next message.")
            .with_details(
                "The spoiler only triggers in the channel where the command was typed. \
                 A member can carry at most 1 spoiler.",
            )
            .with_syntax(
                CommandSyntax::new("Add a spoiler on a member", move |invocation| {
                    add.add_spoiler(invocation)
                })
                .with_param(Arc::clone(&user)),
            )
            .with_syntax(
                CommandSyntax::new("Remove your spoiler from a member", move |invocation| {
                    remove.remove_spoiler(invocation)
                })
                .with_param(Arc::clone(&user))
                .with_param(CommandParam::keyword("stop")),
            )
            .with_syntax(
                CommandSyntax::new("Show who set a spoiler on a member", move |invocation| {
                    info.show_spoiler(invocation)
                })
                .with_param(user)
                .with_param(CommandParam::keyword("info")),
            )
            .with_message_hook(self)
    }

    fn add_spoiler(&self, invocation: &Invocation<'_>) -> Result<Reply, CommandHandlerError> {
        let guild_id = invocation.guild_id()?;
        let message = invocation.message();
        let target = invocation.user(0)?;
        let name = escape_markdown(&target.display_name);

        let spoiler = Spoiler::new(
            NewSpoiler {
                guild_id,
                channel_id: message.channel_id,
                author_id: message.author.id,
                author_name: message.author.display_name.clone(),
                target_id: target.id,
            },
            &*self.clock,
        );
        let text = if self.repository.add(&spoiler)? {
            format!("Spoiler added to **{name}**'s next message!")
        } else {
            format!("A spoiler is already set on **{name}**.")
        };
        Ok(Reply::text(text))
    }

    fn remove_spoiler(&self, invocation: &Invocation<'_>) -> Result<Reply, CommandHandlerError> {
        let guild_id = invocation.guild_id()?;
        let target = invocation.user(0)?;

        let changed =
            self.repository
                .remove(guild_id, invocation.message().author.id, target.id)?;
        Ok(reply_when_changed(changed, || {
            Reply::text(format!(
                "Spoiler removed from **{}**!",
                escape_markdown(&target.display_name)
            ))
        }))
    }

    fn show_spoiler(&self, invocation: &Invocation<'_>) -> Result<Reply, CommandHandlerError> {
        let guild_id = invocation.guild_id()?;
        let target = invocation.user(0)?;
        let name = escape_markdown(&target.display_name);

        let text = match self.repository.find(guild_id, target.id)? {
            Some(spoiler) => format!(
                "**{}** set a spoiler on **{name}**!",
                escape_markdown(spoiler.author_name())
            ),
            None => format!("No spoiler on **{name}**!"),
        };
        Ok(Reply::text(text))
    }

    fn can_spoil(&self, content: &str) -> bool {
        !content.trim().is_empty()
            && !content.starts_with(self.trigger)
            && !is_single_link(content)
    }
}

/// The public post replacing a spoiled message.
fn announcement(message: &IncomingMessage, spoiler: &Spoiler) -> RichMessage {
    let hidden = extract_links(&message.content).to_markdown();
    RichMessage::new(
        "🍿 Public announcement! 🍿",
        format!(
            "**{}** has something to say! 🥳\n\n👉 ||{hidden}||",
            escape_markdown(&message.author.display_name)
        ),
        ANNOUNCEMENT_COLOR,
    )
    .with_footer(format!("Spoiler trolled by {}", spoiler.author_name()))
}

impl<R, C> MessageHook for AutoSpoilerCommand<R, C>
where
    R: SpoilerRepository + 'static,
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
        if !self.can_spoil(&message.content) {
            return HookVerdict::Continue;
        }

        match self
            .repository
            .take(guild_id, message.channel_id, message.author.id)
        {
            Ok(Some(spoiler)) => {
                debug!(message_id = %message.id, author_id = %spoiler.author_id(), "spoiling message");
                effects.schedule(SideEffect::Post {
                    channel_id: message.channel_id,
                    content: ReplyContent::Rich(announcement(message, &spoiler)),
                    replacing: Some(message.reference()),
                });
                HookVerdict::Consumed
            }
            Ok(None) => HookVerdict::Continue,
            Err(error) => {
                warn!(%error, message_id = %message.id, "failed to load spoiler");
                HookVerdict::Continue
            }
        }
    }
}
