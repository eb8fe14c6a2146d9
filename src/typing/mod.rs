//! Typing messages: the `tape` command and its typing hook.
//!
//! A member records a message for another member; the bot posts it, with a
//! mention, as soon as that member starts typing in the channel where the
//! message was recorded.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The command definition and hook in [`command`]

pub mod adapters;
pub mod command;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
