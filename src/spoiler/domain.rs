//! Planted spoiler records.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

use crate::command::domain::{ChannelId, GuildId, UserId};

/// A spoiler waiting for its target's next message in one channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spoiler {
    guild_id: GuildId,
    channel_id: ChannelId,
    author_id: UserId,
    author_name: String,
    target_id: UserId,
    created_at: DateTime<Utc>,
}

/// Who plants a spoiler on whom, and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSpoiler {
    /// Guild the spoiler lives in.
    pub guild_id: GuildId,
    /// Channel the spoiler triggers in.
    pub channel_id: ChannelId,
    /// Member who planted the spoiler.
    pub author_id: UserId,
    /// Display name of the author when the spoiler was planted.
    pub author_name: String,
    /// Member whose next message gets spoiled.
    pub target_id: UserId,
}

impl Spoiler {
    /// Creates a spoiler stamped with the current time.
    #[must_use]
    pub fn new(request: NewSpoiler, clock: &impl Clock) -> Self {
        Self {
            guild_id: request.guild_id,
            channel_id: request.channel_id,
            author_id: request.author_id,
            author_name: request.author_name,
            target_id: request.target_id,
            created_at: clock.utc(),
        }
    }

    /// Guild the spoiler lives in.
    #[must_use]
    pub const fn guild_id(&self) -> GuildId {
        self.guild_id
    }

    /// Channel the spoiler triggers in.
    #[must_use]
    pub const fn channel_id(&self) -> ChannelId {
        self.channel_id
    }

    /// Member who planted the spoiler.
    #[must_use]
    pub const fn author_id(&self) -> UserId {
        self.author_id
    }

    /// Display name of the author.
    #[must_use]
    pub fn author_name(&self) -> &str {
        &self.author_name
    }

    /// Member whose next message gets spoiled.
    #[must_use]
    pub const fn target_id(&self) -> UserId {
        self.target_id
    }

    /// When the spoiler was planted.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
