//! Storage entity traits

use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};

/// Trait for types that can be used as storage keys
pub trait StorageKey: Clone + Debug + Send + Sync + Eq + std::hash::Hash {
    /// Returns the key as a string for map-backed stores
    fn as_str(&self) -> &str;
}

/// Trait for records that live in a `Storage`
pub trait StorageEntity: Clone + Debug + Send + Sync + Serialize + DeserializeOwned {
    type Key: StorageKey;

    /// Returns the record's key
    fn key(&self) -> &Self::Key;
}
