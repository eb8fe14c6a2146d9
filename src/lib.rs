//! Tuinbot: a chat-bot command dispatcher.
//!
//! This crate turns free-text chat messages into command invocations. Each
//! command declares one or more syntaxes; the dispatcher picks the syntax a
//! message's arguments satisfy, converting and validating every token on
//! the way.
//!
//! # Architecture
//!
//! Tuinbot follows hexagonal architecture principles:
//!
//! - **Domain**: Pure matching logic with no infrastructure dependencies
//! - **Ports**: Trait interfaces to the chat platform and to persistence
//! - **Adapters**: Concrete implementations of ports (tokio, in-memory)
//!
//! # Modules
//!
//! - [`command`]: Parameter types, syntaxes, registry, and dispatch
//! - [`reaction`]: The automatic reaction command
//! - [`spoiler`]: The automatic spoiler command
//! - [`typing`]: The typing message command
//! - [`config`]: Bot configuration
//! - [`telemetry`]: Tracing subscriber setup

pub mod command;
pub mod config;
pub mod reaction;
pub mod spoiler;
pub mod telemetry;
pub mod typing;
