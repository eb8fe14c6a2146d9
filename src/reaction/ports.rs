//! Persistence port for automatic reactions.
//!
//! Calls are synchronous: command callbacks run inside dispatch and only need
//! a yes/no answer on whether anything changed.

use thiserror::Error;

use super::domain::AutoReaction;
use crate::command::domain::{ChannelId, GuildId, UserId};

/// Result type for reaction store operations.
pub type ReactionStoreResult<T> = Result<T, ReactionStoreError>;

/// Automatic reaction persistence contract.
pub trait ReactionRepository: Send + Sync {
    /// Stores a reaction, replacing any earlier one from the same author on
    /// the same target. Returns whether anything changed.
    ///
    /// # Errors
    ///
    /// Returns [`ReactionStoreError`] when the store is unavailable.
    fn upsert(&self, reaction: &AutoReaction) -> ReactionStoreResult<bool>;

    /// Whether `emoji` already follows `target` in `channel`.
    ///
    /// # Errors
    ///
    /// Returns [`ReactionStoreError`] when the store is unavailable.
    fn exists(
        &self,
        guild: GuildId,
        channel: ChannelId,
        target: UserId,
        emoji: &str,
    ) -> ReactionStoreResult<bool>;

    /// Counts reactions on `target` in the whole guild, optionally ignoring
    /// those set by `excluding_author`.
    ///
    /// # Errors
    ///
    /// Returns [`ReactionStoreError`] when the store is unavailable.
    fn count_for_target(
        &self,
        guild: GuildId,
        target: UserId,
        excluding_author: Option<UserId>,
    ) -> ReactionStoreResult<usize>;

    /// Counts reactions on `target` in one channel.
    ///
    /// # Errors
    ///
    /// Returns [`ReactionStoreError`] when the store is unavailable.
    fn count_in_channel(
        &self,
        guild: GuildId,
        channel: ChannelId,
        target: UserId,
    ) -> ReactionStoreResult<usize>;

    /// Removes the reaction `author` set on `target`. Returns whether one
    /// existed.
    ///
    /// # Errors
    ///
    /// Returns [`ReactionStoreError`] when the store is unavailable.
    fn remove(&self, guild: GuildId, author: UserId, target: UserId) -> ReactionStoreResult<bool>;

    /// Removes every reaction on `target`. Returns whether any existed.
    ///
    /// # Errors
    ///
    /// Returns [`ReactionStoreError`] when the store is unavailable.
    fn remove_all_on(&self, guild: GuildId, target: UserId) -> ReactionStoreResult<bool>;

    /// Emojis following `target`, limited to `channel` when given, oldest
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`ReactionStoreError`] when the store is unavailable.
    fn emojis_for(
        &self,
        guild: GuildId,
        target: UserId,
        channel: Option<ChannelId>,
    ) -> ReactionStoreResult<Vec<String>>;
}

/// Errors returned by reaction store implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReactionStoreError {
    /// The backing store failed.
    #[error("reaction store unavailable: {0}")]
    Unavailable(String),
}
