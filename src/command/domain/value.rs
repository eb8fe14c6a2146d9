//! Converted parameter values.

use serde::{Deserialize, Serialize};

use super::{ChatUser, EmojiId, ValueKind};

/// An emoji accepted by an emoji parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Emoji {
    /// A standard Unicode emoji glyph.
    Unicode {
        /// The glyph itself.
        glyph: String,
    },
    /// A guild custom emoji, written `<:name:id>` in messages.
    Custom {
        /// Emoji name.
        name: String,
        /// Platform identifier.
        id: EmojiId,
        /// Original markup, usable verbatim in replies and reactions.
        markup: String,
    },
}

impl Emoji {
    /// Text form usable in messages and reactions.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unicode { glyph } => glyph,
            Self::Custom { markup, .. } => markup,
        }
    }
}

/// A raw token converted into the value kind of its parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ParamValue {
    /// A resolved chat member.
    User(ChatUser),
    /// An emoji.
    Emoji(Emoji),
    /// A matched fixed keyword.
    Keyword(String),
    /// An integer.
    Integer(i64),
    /// Free text.
    Text(String),
}

impl ParamValue {
    /// Kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::User(_) => ValueKind::User,
            Self::Emoji(_) => ValueKind::Emoji,
            Self::Keyword(_) => ValueKind::Keyword,
            Self::Integer(_) => ValueKind::Integer,
            Self::Text(_) => ValueKind::Text,
        }
    }

    /// Textual form for text-like values (text, keyword, emoji).
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) | Self::Keyword(text) => Some(text),
            Self::Emoji(emoji) => Some(emoji.as_str()),
            Self::User(_) | Self::Integer(_) => None,
        }
    }
}
