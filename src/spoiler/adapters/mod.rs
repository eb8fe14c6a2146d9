//! Adapter implementations of the spoiler ports.

pub mod memory;

pub use memory::InMemorySpoilerRepository;
