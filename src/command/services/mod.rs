//! Application services for the command subsystem.
//!
//! The registry validates definitions once at startup; the dispatcher and
//! manager read it on every message.

mod dispatcher;
mod manager;
mod registry;
mod validator;

pub use dispatcher::{CommandDispatcher, DispatchOutcome, DispatchSettings};
pub use manager::{MessageManager, MessageOutcome};
pub use registry::{CommandRegistry, RegisteredCommand};
pub use validator::validate_syntaxes;
