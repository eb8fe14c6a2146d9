//! Port contracts between the command core and its collaborators.

pub mod directory;
pub mod response;
pub mod scheduler;

pub use directory::{EmojiCatalog, MemberDirectory};
pub use response::{ResponseSink, SinkError, SinkResult};
pub use scheduler::{SideEffect, SideEffectScheduler};
