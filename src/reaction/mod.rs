//! Automatic reactions: the `reac` command and its message hook.
//!
//! Members attach an emoji to another member; the bot then reacts with it
//! under every message that member posts in the channel where the reaction
//! was set up.
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
