//! Storage domain - generic keyed collection abstraction

mod entity;
mod repository;

pub use entity::{StorageEntity, StorageKey};
pub use repository::Storage;

#[cfg(test)]
pub use repository::mock;
