//! Shared fixtures for command unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use rstest::fixture;

use crate::command::adapters::{StaticEmojiCatalog, StaticMemberDirectory};
use crate::command::domain::{
    ChannelId, ChatUser, EmojiId, GuildId, IncomingMessage, MessageId, UserId,
};
use crate::command::ports::MemberDirectory;

pub const GUILD: GuildId = GuildId::new(10);
pub const CHANNEL: ChannelId = ChannelId::new(20);
pub const KNOWN_EMOJI: EmojiId = EmojiId::new(900);

pub fn author() -> ChatUser {
    ChatUser::new(UserId::new(1), "Tester", "tester")
}

pub fn alice() -> ChatUser {
    ChatUser::new(UserId::new(2), "Alice97", "alice97")
}

pub fn alicia() -> ChatUser {
    ChatUser::new(UserId::new(3), "alicia", "alicia")
}

pub fn message(content: &str) -> IncomingMessage {
    IncomingMessage::new(MessageId::new(100), GUILD, CHANNEL, author(), content)
}

pub fn tokens(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|token| (*token).to_owned()).collect()
}

#[fixture]
pub fn members() -> StaticMemberDirectory {
    StaticMemberDirectory::new([author(), alice(), alicia()])
}

#[fixture]
pub fn emojis() -> StaticEmojiCatalog {
    StaticEmojiCatalog::new([KNOWN_EMOJI])
}

/// Member directory counting how often it is asked for candidates.
#[derive(Debug, Default)]
pub struct CountingDirectory {
    pub inner: StaticMemberDirectory,
    pub lookups: AtomicUsize,
}

impl CountingDirectory {
    pub fn new(members: impl IntoIterator<Item = ChatUser>) -> Self {
        Self {
            inner: StaticMemberDirectory::new(members),
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl MemberDirectory for CountingDirectory {
    fn candidates(&self, query: &str) -> Vec<ChatUser> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.candidates(query)
    }
}
