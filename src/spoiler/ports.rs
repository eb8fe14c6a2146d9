//! Persistence port for planted spoilers.

use thiserror::Error;

use super::domain::Spoiler;
use crate::command::domain::{ChannelId, GuildId, UserId};

/// Result type for spoiler store operations.
pub type SpoilerStoreResult<T> = Result<T, SpoilerStoreError>;

/// Planted spoiler persistence contract.
///
/// A target carries at most one spoiler per guild.
pub trait SpoilerRepository: Send + Sync {
    /// Stores a spoiler unless its target already carries one. Returns
    /// whether it was stored.
    ///
    /// # Errors
    ///
    /// Returns [`SpoilerStoreError`] when the store is unavailable.
    fn add(&self, spoiler: &Spoiler) -> SpoilerStoreResult<bool>;

    /// Removes the spoiler `author` planted on `target`. Returns whether one
    /// existed.
    ///
    /// # Errors
    ///
    /// Returns [`SpoilerStoreError`] when the store is unavailable.
    fn remove(&self, guild: GuildId, author: UserId, target: UserId) -> SpoilerStoreResult<bool>;

    /// The spoiler on `target`, left in place.
    ///
    /// # Errors
    ///
    /// Returns [`SpoilerStoreError`] when the store is unavailable.
    fn find(&self, guild: GuildId, target: UserId) -> SpoilerStoreResult<Option<Spoiler>>;

    /// Removes and returns the spoiler on `target` when it triggers in
    /// `channel`.
    ///
    /// # Errors
    ///
    /// Returns [`SpoilerStoreError`] when the store is unavailable.
    fn take(
        &self,
        guild: GuildId,
        channel: ChannelId,
        target: UserId,
    ) -> SpoilerStoreResult<Option<Spoiler>>;
}

/// Errors returned by spoiler store implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SpoilerStoreError {
    /// The backing store failed.
    #[error("spoiler store unavailable: {0}")]
    Unavailable(String),
}
