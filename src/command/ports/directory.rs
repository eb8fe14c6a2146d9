//! Lookup ports used while converting tokens.
//!
//! Both lookups are synchronous: matching never waits on I/O, so adapters
//! answer from whatever the platform client already holds in memory.

use crate::command::domain::{ChatUser, EmojiId};

/// Supplies the members a user reference may resolve to.
pub trait MemberDirectory: Send + Sync {
    /// Returns the candidate pool searched for `query` (for example the
    /// members of the channel the message was posted in).
    fn candidates(&self, query: &str) -> Vec<ChatUser>;
}

/// Knows which custom emojis the platform client can use.
pub trait EmojiCatalog: Send + Sync {
    /// Whether the custom emoji `id` is available.
    fn contains(&self, id: EmojiId) -> bool;
}
