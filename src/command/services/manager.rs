//! Routes incoming chat events to commands and hooks.

use tracing::debug;

use super::dispatcher::{CommandDispatcher, DispatchOutcome};
use crate::command::domain::{
    ChannelId, ChatUser, DispatchError, GuildId, HookVerdict, IncomingMessage, ResolutionContext,
    split_command,
};
use crate::command::ports::SideEffectScheduler;

/// What the manager did with one incoming message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageOutcome {
    /// The message was from a bot or outside a guild.
    Ignored,
    /// The message named a registered command.
    Command(DispatchOutcome),
    /// The message was handed to the message hooks.
    Hooks {
        /// Whether a hook consumed the message.
        consumed: bool,
    },
}

/// Entry point for chat events.
pub struct MessageManager<S> {
    dispatcher: CommandDispatcher<S>,
}

impl<S> MessageManager<S>
where
    S: SideEffectScheduler,
{
    /// Creates a manager around a dispatcher.
    #[must_use]
    pub const fn new(dispatcher: CommandDispatcher<S>) -> Self {
        Self { dispatcher }
    }

    /// The wrapped dispatcher.
    #[must_use]
    pub const fn dispatcher(&self) -> &CommandDispatcher<S> {
        &self.dispatcher
    }

    /// Handles one incoming message.
    ///
    /// Command lines naming a registered command are dispatched; everything
    /// else in a guild runs through the message hooks until one consumes it.
    #[must_use]
    pub fn manage_message(
        &self,
        message: &IncomingMessage,
        resolution: &ResolutionContext<'_>,
    ) -> MessageOutcome {
        if message.author.is_bot || message.guild_id.is_none() {
            return MessageOutcome::Ignored;
        }

        let trigger = self.dispatcher.settings().trigger;
        match split_command(&message.content, trigger) {
            Some(Ok(line)) => {
                let outcome =
                    self.dispatcher
                        .dispatch(&line.name, &line.args, message, resolution);
                if outcome != DispatchOutcome::UnknownCommand {
                    return MessageOutcome::Command(outcome);
                }
            }
            Some(Err(malformed)) => {
                if let Some(command) = self.dispatcher.registry().find(&malformed.name) {
                    debug!(command = %malformed.name, error = %malformed.error, "malformed command line");
                    return MessageOutcome::Command(self.dispatcher.report(
                        command.definition().name(),
                        message,
                        DispatchError::Malformed(malformed.error),
                    ));
                }
            }
            None => {}
        }

        self.run_message_hooks(message)
    }

    /// Runs every typing hook for a member who started typing; returns the
    /// number of hooks run.
    #[must_use]
    pub fn manage_typing(&self, guild_id: GuildId, channel_id: ChannelId, user: &ChatUser) -> usize {
        if user.is_bot {
            return 0;
        }

        let effects: &dyn SideEffectScheduler = self.dispatcher.scheduler().as_ref();
        let mut ran = 0;
        for hook in self.dispatcher.registry().typing_hooks() {
            hook.on_typing(guild_id, channel_id, user, effects);
            ran += 1;
        }
        ran
    }

    fn run_message_hooks(&self, message: &IncomingMessage) -> MessageOutcome {
        let effects: &dyn SideEffectScheduler = self.dispatcher.scheduler().as_ref();
        let consumed = self
            .dispatcher
            .registry()
            .message_hooks()
            .any(|hook| hook.on_message(message, effects) == HookVerdict::Consumed);
        MessageOutcome::Hooks { consumed }
    }
}
