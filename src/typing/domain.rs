//! Recorded typing message records.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

use crate::command::domain::{ChannelId, GuildId, UserId};

/// A message waiting for its target to start typing in one channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypingMessage {
    guild_id: GuildId,
    channel_id: ChannelId,
    author_id: UserId,
    author_name: String,
    target_id: UserId,
    content: String,
    created_at: DateTime<Utc>,
}

/// Who leaves which message for whom, and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTypingMessage {
    /// Guild the message lives in.
    pub guild_id: GuildId,
    /// Channel the message is delivered in.
    pub channel_id: ChannelId,
    /// Member who recorded the message.
    pub author_id: UserId,
    /// Display name of the author when the message was recorded.
    pub author_name: String,
    /// Member the message is waiting for.
    pub target_id: UserId,
    /// Message text, on a single line.
    pub content: String,
}

impl TypingMessage {
    /// Creates a message stamped with the current time.
    #[must_use]
    pub fn new(request: NewTypingMessage, clock: &impl Clock) -> Self {
        Self {
            guild_id: request.guild_id,
            channel_id: request.channel_id,
            author_id: request.author_id,
            author_name: request.author_name,
            target_id: request.target_id,
            content: request.content,
            created_at: clock.utc(),
        }
    }

    /// Guild the message lives in.
    #[must_use]
    pub const fn guild_id(&self) -> GuildId {
        self.guild_id
    }

    /// Channel the message is delivered in.
    #[must_use]
    pub const fn channel_id(&self) -> ChannelId {
        self.channel_id
    }

    /// Member who recorded the message.
    #[must_use]
    pub const fn author_id(&self) -> UserId {
        self.author_id
    }

    /// Display name of the author.
    #[must_use]
    pub fn author_name(&self) -> &str {
        &self.author_name
    }

    /// Member the message is waiting for.
    #[must_use]
    pub const fn target_id(&self) -> UserId {
        self.target_id
    }

    /// Message text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// When the message was last recorded.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
