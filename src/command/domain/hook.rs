//! Hooks commands can attach to non-command chat events.

use super::{ChannelId, ChatUser, GuildId, IncomingMessage};
use crate::command::ports::SideEffectScheduler;

/// Whether a message hook consumed the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookVerdict {
    /// Let the remaining hooks see the message.
    Continue,
    /// The hook deleted or otherwise consumed the message; stop here.
    Consumed,
}

/// Runs on every guild message that is not a command.
pub trait MessageHook: Send + Sync {
    /// Reacts to a message, scheduling any side effect through `effects`.
    fn on_message(&self, message: &IncomingMessage, effects: &dyn SideEffectScheduler)
    -> HookVerdict;
}

/// Runs when a guild member starts typing.
pub trait TypingHook: Send + Sync {
    /// Reacts to `user` typing in a guild channel.
    fn on_typing(
        &self,
        guild_id: GuildId,
        channel_id: ChannelId,
        user: &ChatUser,
        effects: &dyn SideEffectScheduler,
    );
}
