//! Side-effect scheduler backed by the tokio runtime.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::{Handle, TryCurrentError};
use tracing::{debug, warn};

use crate::command::domain::{ChannelId, MessageRef, Reply, ReplyContent};
use crate::command::ports::{ResponseSink, SideEffect, SideEffectScheduler};

/// Spawns one task per side effect on a tokio runtime.
///
/// A reply task sends the reply, waits for its TTL, then deletes the reply
/// and the message that triggered it. A post task sends its message and only
/// then deletes the message it replaces. Failures are logged and dropped.
#[derive(Debug)]
pub struct TokioSideEffectScheduler<S> {
    sink: Arc<S>,
    handle: Handle,
    default_ttl: Duration,
}

impl<S> TokioSideEffectScheduler<S>
where
    S: ResponseSink + 'static,
{
    /// Creates a scheduler on the runtime the caller is running in.
    ///
    /// # Errors
    ///
    /// Returns [`TryCurrentError`] when called outside a tokio runtime.
    pub fn new(sink: Arc<S>, default_ttl: Duration) -> Result<Self, TryCurrentError> {
        Ok(Self::with_handle(sink, Handle::try_current()?, default_ttl))
    }

    /// Creates a scheduler spawning onto `handle`.
    #[must_use]
    pub const fn with_handle(sink: Arc<S>, handle: Handle, default_ttl: Duration) -> Self {
        Self {
            sink,
            handle,
            default_ttl,
        }
    }

    fn spawn_reply(&self, to: MessageRef, reply: Reply) {
        let sink = Arc::clone(&self.sink);
        let ttl = reply.ttl.unwrap_or(self.default_ttl);
        self.handle.spawn(async move {
            let sent = match sink.send(to, reply.content).await {
                Ok(sent) => sent,
                Err(error) => {
                    warn!(%error, message_id = %to.message_id, "failed to send reply");
                    return;
                }
            };

            tokio::time::sleep(ttl).await;
            for message in [sent, to] {
                if let Err(error) = sink.delete(message).await {
                    debug!(%error, message_id = %message.message_id, "failed to delete message");
                }
            }
        });
    }

    fn spawn_post(
        &self,
        channel_id: ChannelId,
        content: ReplyContent,
        replacing: Option<MessageRef>,
    ) {
        let sink = Arc::clone(&self.sink);
        self.handle.spawn(async move {
            if let Err(error) = sink.post(channel_id, content).await {
                warn!(%error, %channel_id, "failed to post message");
                return;
            }

            if let Some(original) = replacing
                && let Err(error) = sink.delete(original).await
            {
                warn!(%error, message_id = %original.message_id, "failed to delete replaced message");
            }
        });
    }

    fn spawn_reactions(&self, to: MessageRef, emojis: Vec<String>) {
        let sink = Arc::clone(&self.sink);
        self.handle.spawn(async move {
            for emoji in emojis {
                if let Err(error) = sink.react(to, emoji).await {
                    warn!(%error, message_id = %to.message_id, "failed to add reaction");
                }
            }
        });
    }
}

impl<S> SideEffectScheduler for TokioSideEffectScheduler<S>
where
    S: ResponseSink + 'static,
{
    fn schedule(&self, effect: SideEffect) {
        match effect {
            SideEffect::Reply { to, reply } => self.spawn_reply(to, reply),
            SideEffect::React { to, emojis } => self.spawn_reactions(to, emojis),
            SideEffect::Post {
                channel_id,
                content,
                replacing,
            } => self.spawn_post(channel_id, content, replacing),
        }
    }
}
