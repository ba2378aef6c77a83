//! Storage trait definition

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

use super::entity::StorageEntity;

/// Generic CRUD storage for a single entity type
#[async_trait]
pub trait Storage<E>: Send + Sync + Debug
where
    E: StorageEntity + 'static,
{
    /// Retrieves an entity by its key
    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError>;

    /// Retrieves all entities
    async fn list(&self) -> Result<Vec<E>, DomainError>;

    /// Creates a new entity, returns a conflict if the key is taken
    async fn create(&self, entity: E) -> Result<E, DomainError>;

    /// Replaces an existing entity, returns not-found if absent
    async fn update(&self, entity: E) -> Result<E, DomainError>;

    /// Deletes an entity by its key, returns true if something was removed
    async fn delete(&self, key: &E::Key) -> Result<bool, DomainError>;

    async fn exists(&self, key: &E::Key) -> Result<bool, DomainError> {
        Ok(self.get(key).await?.is_some())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.list().await?.len())
    }
}
