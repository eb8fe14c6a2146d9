//! Scheduled side effects.
//!
//! Dispatch decides *what* to send synchronously and hands the sending off
//! to a scheduler. The dispatcher never observes whether the side effect
//! eventually succeeded.

use crate::command::domain::{ChannelId, MessageRef, Reply, ReplyContent};

/// A side effect produced by dispatch or by a hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideEffect {
    /// Reply to a message, then delete both after the reply TTL.
    Reply {
        /// Message being answered.
        to: MessageRef,
        /// Reply content and TTL.
        reply: Reply,
    },
    /// Add reactions under a message.
    React {
        /// Message to react on.
        to: MessageRef,
        /// Emojis, in order.
        emojis: Vec<String>,
    },
    /// Post a standalone message that stays in the channel.
    Post {
        /// Channel to post in.
        channel_id: ChannelId,
        /// Message content.
        content: ReplyContent,
        /// Message deleted once the post went through.
        replacing: Option<MessageRef>,
    },
}

/// Fire-and-forget executor of side effects.
pub trait SideEffectScheduler: Send + Sync {
    /// Queues a side effect; never blocks and never reports failure.
    fn schedule(&self, effect: SideEffect);

    /// Convenience for [`SideEffect::Reply`].
    fn reply(&self, to: MessageRef, reply: Reply) {
        self.schedule(SideEffect::Reply { to, reply });
    }
}
