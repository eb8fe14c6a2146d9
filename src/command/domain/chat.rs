//! Chat-platform values the command core exchanges with its collaborators.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

macro_rules! snowflake_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wraps a raw platform identifier.
            #[must_use]
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Returns the raw platform identifier.
            #[must_use]
            pub const fn into_inner(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

snowflake_id!(
    /// Identifier of a guild (server).
    GuildId
);
snowflake_id!(
    /// Identifier of a text channel.
    ChannelId
);
snowflake_id!(
    /// Identifier of a user account.
    UserId
);
snowflake_id!(
    /// Identifier of a single chat message.
    MessageId
);
snowflake_id!(
    /// Identifier of a guild-specific custom emoji.
    EmojiId
);

/// A chat member as seen by the command core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatUser {
    /// Account identifier.
    pub id: UserId,
    /// Name shown in the guild (nickname when set).
    pub display_name: String,
    /// Global account name.
    pub account_name: String,
    /// Whether the account is an automated bot.
    #[serde(default)]
    pub is_bot: bool,
}

impl ChatUser {
    /// Creates a human chat member.
    #[must_use]
    pub fn new(
        id: UserId,
        display_name: impl Into<String>,
        account_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            account_name: account_name.into(),
            is_bot: false,
        }
    }

    /// Flags the member as a bot account.
    #[must_use]
    pub const fn as_bot(mut self) -> Self {
        self.is_bot = true;
        self
    }
}

/// Addresses a message that already exists on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageRef {
    /// Channel holding the message.
    pub channel_id: ChannelId,
    /// Message identifier.
    pub message_id: MessageId,
}

impl MessageRef {
    /// Creates a message reference.
    #[must_use]
    pub const fn new(channel_id: ChannelId, message_id: MessageId) -> Self {
        Self {
            channel_id,
            message_id,
        }
    }
}

/// A message received from the chat platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    /// Message identifier.
    pub id: MessageId,
    /// Guild the message was posted in; `None` for private messages.
    pub guild_id: Option<GuildId>,
    /// Channel the message was posted in.
    pub channel_id: ChannelId,
    /// Message author.
    pub author: ChatUser,
    /// Raw message text.
    pub content: String,
}

impl IncomingMessage {
    /// Creates a guild message.
    #[must_use]
    pub fn new(
        id: MessageId,
        guild_id: GuildId,
        channel_id: ChannelId,
        author: ChatUser,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            guild_id: Some(guild_id),
            channel_id,
            author,
            content: content.into(),
        }
    }

    /// Returns a reference usable to reply to, react on, or delete this message.
    #[must_use]
    pub const fn reference(&self) -> MessageRef {
        MessageRef::new(self.channel_id, self.id)
    }
}

/// One titled block inside a [`RichMessage`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichField {
    /// Field heading.
    pub name: String,
    /// Field body (markdown).
    pub value: String,
    /// Whether the platform may lay the field out next to its neighbours.
    pub inline: bool,
}

/// Structured rich-message payload (an "embed" on most platforms).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichMessage {
    /// Title line.
    pub title: String,
    /// Body text.
    pub description: String,
    /// Accent colour as `0xRRGGBB`.
    pub color: u32,
    /// Ordered fields.
    #[serde(default)]
    pub fields: Vec<RichField>,
    /// Optional footer text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
}

impl RichMessage {
    /// Creates a rich message without fields or footer.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>, color: u32) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            color,
            fields: Vec::new(),
            footer: None,
        }
    }

    /// Appends a field.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(RichField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    /// Sets the footer text.
    #[must_use]
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }
}

/// Content of a reply: plain text or a rich payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "body", rename_all = "snake_case")]
pub enum ReplyContent {
    /// Plain markdown text.
    Text(String),
    /// Structured rich message.
    Rich(RichMessage),
}

impl ReplyContent {
    /// Returns the plain text, if this is a text reply.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Rich(_) => None,
        }
    }
}

/// A reply together with its auto-deletion delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// What to send.
    pub content: ReplyContent,
    /// Delay before the reply and its trigger are deleted; `None` uses the
    /// scheduler default.
    pub ttl: Option<Duration>,
}

impl Reply {
    /// Creates a plain-text reply using the default TTL.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: ReplyContent::Text(text.into()),
            ttl: None,
        }
    }

    /// Creates a rich reply using the default TTL.
    #[must_use]
    pub const fn rich(message: RichMessage) -> Self {
        Self {
            content: ReplyContent::Rich(message),
            ttl: None,
        }
    }

    /// Overrides the auto-deletion delay.
    #[must_use]
    pub const fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }
}

/// Escapes markdown control characters so a name renders literally.
#[must_use]
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for character in text.chars() {
        if matches!(character, '>' | '`' | '*' | '_' | '-' | '~' | '|') {
            escaped.push('\\');
        }
        escaped.push(character);
    }
    escaped
}
