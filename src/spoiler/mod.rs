//! Automatic spoilers: the `spoil` command and its message hook.
//!
//! A member plants a spoiler on another member; the next message that member
//! posts in the channel where the spoiler was planted is deleted and posted
//! again hidden behind spoiler markup.
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
