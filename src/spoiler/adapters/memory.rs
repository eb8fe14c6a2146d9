//! In-memory spoiler store.

use std::sync::{Arc, RwLock};

use crate::command::domain::{ChannelId, GuildId, UserId};
use crate::spoiler::domain::Spoiler;
use crate::spoiler::ports::{SpoilerRepository, SpoilerStoreError, SpoilerStoreResult};

/// Thread-safe in-memory spoiler store.
#[derive(Debug, Clone, Default)]
pub struct InMemorySpoilerRepository {
    spoilers: Arc<RwLock<Vec<Spoiler>>>,
}

impl InMemorySpoilerRepository {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read<T>(&self, query: impl FnOnce(&[Spoiler]) -> T) -> SpoilerStoreResult<T> {
        let spoilers = self
            .spoilers
            .read()
            .map_err(|err| SpoilerStoreError::Unavailable(err.to_string()))?;
        Ok(query(&spoilers))
    }

    fn write<T>(&self, update: impl FnOnce(&mut Vec<Spoiler>) -> T) -> SpoilerStoreResult<T> {
        let mut spoilers = self
            .spoilers
            .write()
            .map_err(|err| SpoilerStoreError::Unavailable(err.to_string()))?;
        Ok(update(&mut spoilers))
    }
}

fn on_target(guild: GuildId, target: UserId) -> impl Fn(&Spoiler) -> bool {
    move |stored| stored.guild_id() == guild && stored.target_id() == target
}

impl SpoilerRepository for InMemorySpoilerRepository {
    fn add(&self, spoiler: &Spoiler) -> SpoilerStoreResult<bool> {
        self.write(|spoilers| {
            if spoilers
                .iter()
                .any(on_target(spoiler.guild_id(), spoiler.target_id()))
            {
                return false;
            }
            spoilers.push(spoiler.clone());
            true
        })
    }

    fn remove(&self, guild: GuildId, author: UserId, target: UserId) -> SpoilerStoreResult<bool> {
        let matches = on_target(guild, target);
        self.write(|spoilers| {
            let before = spoilers.len();
            spoilers.retain(|stored| !(matches(stored) && stored.author_id() == author));
            spoilers.len() != before
        })
    }

    fn find(&self, guild: GuildId, target: UserId) -> SpoilerStoreResult<Option<Spoiler>> {
        let matches = on_target(guild, target);
        self.read(|spoilers| spoilers.iter().find(|&stored| matches(stored)).cloned())
    }

    fn take(
        &self,
        guild: GuildId,
        channel: ChannelId,
        target: UserId,
    ) -> SpoilerStoreResult<Option<Spoiler>> {
        let matches = on_target(guild, target);
        self.write(|spoilers| {
            let index = spoilers
                .iter()
                .position(|stored| matches(stored) && stored.channel_id() == channel)?;
            Some(spoilers.remove(index))
        })
    }
}
