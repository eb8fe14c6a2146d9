//! Response sink port: how replies reach the chat platform.

use async_trait::async_trait;
use thiserror::Error;

use crate::command::domain::{ChannelId, MessageRef, ReplyContent};

/// Result type for response sink operations.
pub type SinkResult<T> = Result<T, SinkError>;

/// Outbound chat operations.
#[async_trait]
pub trait ResponseSink: Send + Sync {
    /// Sends `content` as a reply to `to`, returning the created message.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] when the platform rejects the message.
    async fn send(&self, to: MessageRef, content: ReplyContent) -> SinkResult<MessageRef>;

    /// Posts `content` to a channel without answering any message.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] when the platform rejects the message.
    async fn post(&self, channel_id: ChannelId, content: ReplyContent) -> SinkResult<MessageRef>;

    /// Deletes a message.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] when the message cannot be deleted.
    async fn delete(&self, message: MessageRef) -> SinkResult<()>;

    /// Adds an emoji reaction under a message.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] when the reaction cannot be added.
    async fn react(&self, message: MessageRef, emoji: String) -> SinkResult<()>;
}

/// Errors returned by response sink implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SinkError {
    /// The target message no longer exists.
    #[error("message {0:?} not found")]
    NotFound(MessageRef),

    /// Transport or platform failure.
    #[error("response sink unavailable: {0}")]
    Unavailable(String),
}
