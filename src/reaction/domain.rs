//! Automatic reaction records.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

use crate::command::domain::{ChannelId, GuildId, UserId};

/// One member's emoji attached to another member in one channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoReaction {
    guild_id: GuildId,
    channel_id: ChannelId,
    author_id: UserId,
    target_id: UserId,
    emoji: String,
    created_at: DateTime<Utc>,
}

/// Who attaches what to whom, and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAutoReaction {
    /// Guild the reaction lives in.
    pub guild_id: GuildId,
    /// Channel the reaction is active in.
    pub channel_id: ChannelId,
    /// Member who set the reaction up.
    pub author_id: UserId,
    /// Member the reaction follows.
    pub target_id: UserId,
    /// Emoji markup as sent to the platform.
    pub emoji: String,
}

impl AutoReaction {
    /// Creates a reaction stamped with the current time.
    #[must_use]
    pub fn new(request: NewAutoReaction, clock: &impl Clock) -> Self {
        Self {
            guild_id: request.guild_id,
            channel_id: request.channel_id,
            author_id: request.author_id,
            target_id: request.target_id,
            emoji: request.emoji,
            created_at: clock.utc(),
        }
    }

    /// Guild the reaction lives in.
    #[must_use]
    pub const fn guild_id(&self) -> GuildId {
        self.guild_id
    }

    /// Channel the reaction is active in.
    #[must_use]
    pub const fn channel_id(&self) -> ChannelId {
        self.channel_id
    }

    /// Member who set the reaction up.
    #[must_use]
    pub const fn author_id(&self) -> UserId {
        self.author_id
    }

    /// Member the reaction follows.
    #[must_use]
    pub const fn target_id(&self) -> UserId {
        self.target_id
    }

    /// Emoji markup.
    #[must_use]
    pub fn emoji(&self) -> &str {
        &self.emoji
    }

    /// When the reaction was last set.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
