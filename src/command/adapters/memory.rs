//! In-memory adapters for tests and the console runner.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::command::domain::{
    ChannelId, ChatUser, EmojiId, MessageId, MessageRef, Reply, ReplyContent,
};
use crate::command::ports::{
    EmojiCatalog, MemberDirectory, ResponseSink, SideEffect, SideEffectScheduler, SinkResult,
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Scheduler that records side effects instead of executing them.
#[derive(Debug, Clone, Default)]
pub struct RecordingScheduler {
    effects: Arc<Mutex<Vec<SideEffect>>>,
}

impl RecordingScheduler {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every side effect scheduled so far, in order.
    #[must_use]
    pub fn effects(&self) -> Vec<SideEffect> {
        lock(&self.effects).clone()
    }

    /// Only the scheduled replies, in order.
    #[must_use]
    pub fn replies(&self) -> Vec<Reply> {
        lock(&self.effects)
            .iter()
            .filter_map(|effect| match effect {
                SideEffect::Reply { reply, .. } => Some(reply.clone()),
                SideEffect::React { .. } | SideEffect::Post { .. } => None,
            })
            .collect()
    }

    /// Text of the most recent plain-text reply.
    #[must_use]
    pub fn last_reply_text(&self) -> Option<String> {
        self.replies()
            .iter()
            .rev()
            .find_map(|reply| reply.content.as_text().map(str::to_owned))
    }

    /// Only the scheduled channel posts, in order.
    #[must_use]
    pub fn posts(&self) -> Vec<(ChannelId, ReplyContent, Option<MessageRef>)> {
        lock(&self.effects)
            .iter()
            .filter_map(|effect| match effect {
                SideEffect::Post {
                    channel_id,
                    content,
                    replacing,
                } => Some((*channel_id, content.clone(), *replacing)),
                SideEffect::Reply { .. } | SideEffect::React { .. } => None,
            })
            .collect()
    }

    /// Forgets everything recorded.
    pub fn clear(&self) {
        lock(&self.effects).clear();
    }
}

impl SideEffectScheduler for RecordingScheduler {
    fn schedule(&self, effect: SideEffect) {
        lock(&self.effects).push(effect);
    }
}

/// Member directory answering every query with a fixed member list.
#[derive(Debug, Clone, Default)]
pub struct StaticMemberDirectory {
    members: Vec<ChatUser>,
}

impl StaticMemberDirectory {
    /// Creates a directory over `members`.
    #[must_use]
    pub fn new(members: impl IntoIterator<Item = ChatUser>) -> Self {
        Self {
            members: members.into_iter().collect(),
        }
    }
}

impl MemberDirectory for StaticMemberDirectory {
    fn candidates(&self, _query: &str) -> Vec<ChatUser> {
        self.members.clone()
    }
}

/// Emoji catalog over a fixed set of custom emoji ids.
#[derive(Debug, Clone, Default)]
pub struct StaticEmojiCatalog {
    known: HashSet<EmojiId>,
}

impl StaticEmojiCatalog {
    /// Creates a catalog knowing `ids`.
    #[must_use]
    pub fn new(ids: impl IntoIterator<Item = EmojiId>) -> Self {
        Self {
            known: ids.into_iter().collect(),
        }
    }
}

impl EmojiCatalog for StaticEmojiCatalog {
    fn contains(&self, id: EmojiId) -> bool {
        self.known.contains(&id)
    }
}

/// A reply delivered to an [`InMemoryResponseSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentReply {
    /// Message answered.
    pub to: MessageRef,
    /// Identifier assigned to the reply.
    pub reply: MessageRef,
    /// Delivered content.
    pub content: ReplyContent,
}

/// A standalone message delivered to an [`InMemoryResponseSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedMessage {
    /// Identifier assigned to the message.
    pub message: MessageRef,
    /// Delivered content.
    pub content: ReplyContent,
}

#[derive(Debug, Default)]
struct SinkState {
    sent: Vec<SentReply>,
    posted: Vec<PostedMessage>,
    deleted: Vec<MessageRef>,
    reactions: Vec<(MessageRef, String)>,
}

/// Response sink recording every operation.
#[derive(Debug, Clone)]
pub struct InMemoryResponseSink {
    state: Arc<Mutex<SinkState>>,
    next_id: Arc<AtomicU64>,
}

const FIRST_REPLY_ID: u64 = 1_000_000;

impl InMemoryResponseSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::default(),
            next_id: Arc::new(AtomicU64::new(FIRST_REPLY_ID)),
        }
    }

    /// Replies delivered so far.
    #[must_use]
    pub fn sent(&self) -> Vec<SentReply> {
        lock(&self.state).sent.clone()
    }

    /// Standalone messages posted so far.
    #[must_use]
    pub fn posted(&self) -> Vec<PostedMessage> {
        lock(&self.state).posted.clone()
    }

    /// Messages deleted so far.
    #[must_use]
    pub fn deleted(&self) -> Vec<MessageRef> {
        lock(&self.state).deleted.clone()
    }

    /// Reactions added so far.
    #[must_use]
    pub fn reactions(&self) -> Vec<(MessageRef, String)> {
        lock(&self.state).reactions.clone()
    }
}

impl Default for InMemoryResponseSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResponseSink for InMemoryResponseSink {
    async fn send(&self, to: MessageRef, content: ReplyContent) -> SinkResult<MessageRef> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let reply = MessageRef::new(to.channel_id, MessageId::new(id));
        lock(&self.state).sent.push(SentReply { to, reply, content });
        Ok(reply)
    }

    async fn post(&self, channel_id: ChannelId, content: ReplyContent) -> SinkResult<MessageRef> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let message = MessageRef::new(channel_id, MessageId::new(id));
        lock(&self.state).posted.push(PostedMessage { message, content });
        Ok(message)
    }

    async fn delete(&self, message: MessageRef) -> SinkResult<()> {
        lock(&self.state).deleted.push(message);
        Ok(())
    }

    async fn react(&self, message: MessageRef, emoji: String) -> SinkResult<()> {
        lock(&self.state).reactions.push((message, emoji));
        Ok(())
    }
}
