//! In-memory typing message store.

use std::sync::{Arc, RwLock};

use crate::command::domain::{ChannelId, GuildId, UserId};
use crate::typing::domain::TypingMessage;
use crate::typing::ports::{TypingMessageRepository, TypingStoreError, TypingStoreResult};

/// Thread-safe in-memory typing message store, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTypingMessageRepository {
    messages: Arc<RwLock<Vec<TypingMessage>>>,
}

impl InMemoryTypingMessageRepository {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read<T>(&self, query: impl FnOnce(&[TypingMessage]) -> T) -> TypingStoreResult<T> {
        let messages = self
            .messages
            .read()
            .map_err(|err| TypingStoreError::Unavailable(err.to_string()))?;
        Ok(query(&messages))
    }

    fn write<T>(
        &self,
        update: impl FnOnce(&mut Vec<TypingMessage>) -> T,
    ) -> TypingStoreResult<T> {
        let mut messages = self
            .messages
            .write()
            .map_err(|err| TypingStoreError::Unavailable(err.to_string()))?;
        Ok(update(&mut messages))
    }
}

fn from_author(guild: GuildId, author: UserId, target: UserId) -> impl Fn(&TypingMessage) -> bool {
    move |stored| {
        stored.guild_id() == guild && stored.author_id() == author && stored.target_id() == target
    }
}

impl TypingMessageRepository for InMemoryTypingMessageRepository {
    fn upsert(&self, message: &TypingMessage) -> TypingStoreResult<bool> {
        let same_slot = from_author(message.guild_id(), message.author_id(), message.target_id());
        self.write(|messages| {
            if let Some(index) = messages.iter().position(same_slot) {
                if messages.get(index) == Some(message) {
                    return false;
                }
                messages.remove(index);
            }
            messages.push(message.clone());
            true
        })
    }

    fn count_for_target(
        &self,
        guild: GuildId,
        target: UserId,
        excluding_author: Option<UserId>,
    ) -> TypingStoreResult<usize> {
        self.read(|messages| {
            messages
                .iter()
                .filter(|stored| stored.guild_id() == guild && stored.target_id() == target)
                .filter(|stored| excluding_author != Some(stored.author_id()))
                .count()
        })
    }

    fn remove(&self, guild: GuildId, author: UserId, target: UserId) -> TypingStoreResult<bool> {
        let matches = from_author(guild, author, target);
        self.write(|messages| {
            let before = messages.len();
            messages.retain(|stored| !matches(stored));
            messages.len() != before
        })
    }

    fn content(
        &self,
        guild: GuildId,
        author: UserId,
        target: UserId,
    ) -> TypingStoreResult<Option<String>> {
        let matches = from_author(guild, author, target);
        self.read(|messages| {
            messages
                .iter()
                .find(|&stored| matches(stored))
                .map(|stored| stored.content().to_owned())
        })
    }

    fn take_for(
        &self,
        guild: GuildId,
        channel: ChannelId,
        target: UserId,
    ) -> TypingStoreResult<Vec<TypingMessage>> {
        self.write(|messages| {
            let (taken, kept): (Vec<_>, Vec<_>) =
                std::mem::take(messages).into_iter().partition(|stored| {
                    stored.guild_id() == guild
                        && stored.channel_id() == channel
                        && stored.target_id() == target
                });
            *messages = kept;
            taken
        })
    }
}
