//! In-memory reaction store.

use std::sync::{Arc, RwLock};

use crate::command::domain::{ChannelId, GuildId, UserId};
use crate::reaction::domain::AutoReaction;
use crate::reaction::ports::{ReactionRepository, ReactionStoreError, ReactionStoreResult};

/// Thread-safe in-memory reaction store, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReactionRepository {
    reactions: Arc<RwLock<Vec<AutoReaction>>>,
}

impl InMemoryReactionRepository {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read<T>(&self, query: impl FnOnce(&[AutoReaction]) -> T) -> ReactionStoreResult<T> {
        let reactions = self
            .reactions
            .read()
            .map_err(|err| ReactionStoreError::Unavailable(err.to_string()))?;
        Ok(query(&reactions))
    }

    fn write<T>(&self, update: impl FnOnce(&mut Vec<AutoReaction>) -> T) -> ReactionStoreResult<T> {
        let mut reactions = self
            .reactions
            .write()
            .map_err(|err| ReactionStoreError::Unavailable(err.to_string()))?;
        Ok(update(&mut reactions))
    }
}

fn retain_counting(
    reactions: &mut Vec<AutoReaction>,
    keep: impl Fn(&AutoReaction) -> bool,
) -> bool {
    let before = reactions.len();
    reactions.retain(keep);
    reactions.len() != before
}

impl ReactionRepository for InMemoryReactionRepository {
    fn upsert(&self, reaction: &AutoReaction) -> ReactionStoreResult<bool> {
        self.write(|reactions| {
            let existing = reactions.iter().position(|stored| {
                stored.guild_id() == reaction.guild_id()
                    && stored.author_id() == reaction.author_id()
                    && stored.target_id() == reaction.target_id()
            });
            if let Some(index) = existing {
                if reactions.get(index) == Some(reaction) {
                    return false;
                }
                // A replaced reaction is the newest one.
                reactions.remove(index);
            }
            reactions.push(reaction.clone());
            true
        })
    }

    fn exists(
        &self,
        guild: GuildId,
        channel: ChannelId,
        target: UserId,
        emoji: &str,
    ) -> ReactionStoreResult<bool> {
        self.read(|reactions| {
            reactions.iter().any(|stored| {
                stored.guild_id() == guild
                    && stored.channel_id() == channel
                    && stored.target_id() == target
                    && stored.emoji() == emoji
            })
        })
    }

    fn count_for_target(
        &self,
        guild: GuildId,
        target: UserId,
        excluding_author: Option<UserId>,
    ) -> ReactionStoreResult<usize> {
        self.read(|reactions| {
            reactions
                .iter()
                .filter(|stored| stored.guild_id() == guild && stored.target_id() == target)
                .filter(|stored| excluding_author != Some(stored.author_id()))
                .count()
        })
    }

    fn count_in_channel(
        &self,
        guild: GuildId,
        channel: ChannelId,
        target: UserId,
    ) -> ReactionStoreResult<usize> {
        self.read(|reactions| {
            reactions
                .iter()
                .filter(|stored| {
                    stored.guild_id() == guild
                        && stored.channel_id() == channel
                        && stored.target_id() == target
                })
                .count()
        })
    }

    fn remove(&self, guild: GuildId, author: UserId, target: UserId) -> ReactionStoreResult<bool> {
        self.write(|reactions| {
            retain_counting(reactions, |stored| {
                !(stored.guild_id() == guild
                    && stored.author_id() == author
                    && stored.target_id() == target)
            })
        })
    }

    fn remove_all_on(&self, guild: GuildId, target: UserId) -> ReactionStoreResult<bool> {
        self.write(|reactions| {
            retain_counting(reactions, |stored| {
                !(stored.guild_id() == guild && stored.target_id() == target)
            })
        })
    }

    fn emojis_for(
        &self,
        guild: GuildId,
        target: UserId,
        channel: Option<ChannelId>,
    ) -> ReactionStoreResult<Vec<String>> {
        self.read(|reactions| {
            reactions
                .iter()
                .filter(|stored| stored.guild_id() == guild && stored.target_id() == target)
                .filter(|stored| channel.is_none_or(|wanted| stored.channel_id() == wanted))
                .map(|stored| stored.emoji().to_owned())
                .collect()
        })
    }
}
