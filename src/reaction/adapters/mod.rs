//! Adapter implementations of the reaction ports.

pub mod memory;

pub use memory::InMemoryReactionRepository;
