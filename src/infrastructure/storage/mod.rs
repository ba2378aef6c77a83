//! Storage infrastructure - storage implementations

mod in_memory;

pub use in_memory::InMemoryStorage;
