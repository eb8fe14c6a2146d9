//! Adapter implementations of the typing message ports.

pub mod memory;

pub use memory::InMemoryTypingMessageRepository;
