//! User repository trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::{User, UserId};
use crate::domain::DomainError;

/// Repository trait for user storage
///
/// Implementations own email uniqueness: `create` and `update` must refuse a
/// record whose email belongs to a different user, atomically with the write.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Get a user by their ID
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Get a user by their email address
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// List all users
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Create a new user
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Replace an existing user
    async fn update(&self, user: &User) -> Result<User, DomainError>;

    /// Delete a user, returns true if a record was removed
    async fn delete(&self, id: &UserId) -> Result<bool, DomainError>;

    /// Check if an email is registered
    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.get_by_email(email).await?.is_some())
    }
}
