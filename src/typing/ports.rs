//! Persistence port for recorded typing messages.

use thiserror::Error;

use super::domain::TypingMessage;
use crate::command::domain::{ChannelId, GuildId, UserId};

/// Result type for typing message store operations.
pub type TypingStoreResult<T> = Result<T, TypingStoreError>;

/// Recorded typing message persistence contract.
pub trait TypingMessageRepository: Send + Sync {
    /// Stores a message, replacing any earlier one from the same author for
    /// the same target. Returns whether anything changed.
    ///
    /// # Errors
    ///
    /// Returns [`TypingStoreError`] when the store is unavailable.
    fn upsert(&self, message: &TypingMessage) -> TypingStoreResult<bool>;

    /// Counts messages waiting for `target`, optionally ignoring the one
    /// from `excluding_author`.
    ///
    /// # Errors
    ///
    /// Returns [`TypingStoreError`] when the store is unavailable.
    fn count_for_target(
        &self,
        guild: GuildId,
        target: UserId,
        excluding_author: Option<UserId>,
    ) -> TypingStoreResult<usize>;

    /// Removes the message `author` left for `target`. Returns whether one
    /// existed.
    ///
    /// # Errors
    ///
    /// Returns [`TypingStoreError`] when the store is unavailable.
    fn remove(&self, guild: GuildId, author: UserId, target: UserId) -> TypingStoreResult<bool>;

    /// Text of the message `author` left for `target`, left in place.
    ///
    /// # Errors
    ///
    /// Returns [`TypingStoreError`] when the store is unavailable.
    fn content(
        &self,
        guild: GuildId,
        author: UserId,
        target: UserId,
    ) -> TypingStoreResult<Option<String>>;

    /// Removes and returns every message waiting for `target` in `channel`,
    /// oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`TypingStoreError`] when the store is unavailable.
    fn take_for(
        &self,
        guild: GuildId,
        channel: ChannelId,
        target: UserId,
    ) -> TypingStoreResult<Vec<TypingMessage>>;
}

/// Errors returned by typing message store implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TypingStoreError {
    /// The backing store failed.
    #[error("typing message store unavailable: {0}")]
    Unavailable(String),
}
