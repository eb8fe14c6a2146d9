//! Command grammar engine.
//!
//! Parses trigger-prefixed chat messages against the syntaxes each command
//! declares and invokes the matching callback. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Registry, dispatcher, and message routing in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
