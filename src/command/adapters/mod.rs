//! Adapters implementing the command ports.

pub mod memory;
pub mod tokio_scheduler;

pub use memory::{
    InMemoryResponseSink, PostedMessage, RecordingScheduler, SentReply, StaticEmojiCatalog,
    StaticMemberDirectory,
};
pub use tokio_scheduler::TokioSideEffectScheduler;
