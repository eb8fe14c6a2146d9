//! Context handed to syntax callbacks.

use super::{
    ChatUser, CommandHandlerError, CommandParamExecutor, Emoji, GuildId, IncomingMessage, Reply,
    ValueKind,
};

/// Reply sent when a persistence call reports that nothing changed.
pub const NOTHING_TO_DO: &str = "Nothing to do.";

/// A fully matched syntax, ready for its callback.
#[derive(Debug, Clone, Copy)]
pub struct Invocation<'a> {
    command: &'a str,
    message: &'a IncomingMessage,
    executors: &'a [&'a CommandParamExecutor],
}

impl<'a> Invocation<'a> {
    /// Creates an invocation from resolved executors in parameter order.
    #[must_use]
    pub const fn new(
        command: &'a str,
        message: &'a IncomingMessage,
        executors: &'a [&'a CommandParamExecutor],
    ) -> Self {
        Self {
            command,
            message,
            executors,
        }
    }

    /// Name of the invoked command.
    #[must_use]
    pub const fn command(&self) -> &str {
        self.command
    }

    /// The triggering message.
    #[must_use]
    pub const fn message(&self) -> &IncomingMessage {
        self.message
    }

    /// Guild of the triggering message.
    ///
    /// # Errors
    ///
    /// Returns [`CommandHandlerError::MissingGuild`] for private messages.
    pub fn guild_id(&self) -> Result<GuildId, CommandHandlerError> {
        self.message.guild_id.ok_or(CommandHandlerError::MissingGuild)
    }

    /// Resolved executors in parameter order.
    #[must_use]
    pub const fn executors(&self) -> &[&CommandParamExecutor] {
        self.executors
    }

    /// Resolved user at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CommandHandlerError::MissingValue`] when the position does
    /// not hold a user.
    pub fn user(&self, index: usize) -> Result<&ChatUser, CommandHandlerError> {
        self.executor(index)
            .and_then(CommandParamExecutor::user)
            .ok_or(CommandHandlerError::MissingValue {
                index,
                expected: ValueKind::User,
            })
    }

    /// Resolved emoji at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CommandHandlerError::MissingValue`] when the position does
    /// not hold an emoji.
    pub fn emoji(&self, index: usize) -> Result<&Emoji, CommandHandlerError> {
        self.executor(index)
            .and_then(CommandParamExecutor::emoji)
            .ok_or(CommandHandlerError::MissingValue {
                index,
                expected: ValueKind::Emoji,
            })
    }

    /// Integer at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CommandHandlerError::MissingValue`] when the position does
    /// not hold an integer.
    pub fn integer(&self, index: usize) -> Result<i64, CommandHandlerError> {
        self.executor(index)
            .and_then(CommandParamExecutor::integer)
            .ok_or(CommandHandlerError::MissingValue {
                index,
                expected: ValueKind::Integer,
            })
    }

    /// Text or keyword at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CommandHandlerError::MissingValue`] when the position does
    /// not hold text.
    pub fn text(&self, index: usize) -> Result<&str, CommandHandlerError> {
        self.executor(index)
            .and_then(CommandParamExecutor::text)
            .ok_or(CommandHandlerError::MissingValue {
                index,
                expected: ValueKind::Text,
            })
    }

    fn executor(&self, index: usize) -> Option<&CommandParamExecutor> {
        self.executors.get(index).copied()
    }
}

/// Picks `reply` when a persistence call changed something, and the generic
/// "nothing to do" reply otherwise.
#[must_use]
pub fn reply_when_changed(changed: bool, reply: impl FnOnce() -> Reply) -> Reply {
    if changed {
        reply()
    } else {
        Reply::text(NOTHING_TO_DO)
    }
}
