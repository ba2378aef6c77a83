//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository
///
/// Writers hold both write guards (records first, then the index) for the
/// whole mutation, which makes the email uniqueness check atomic.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
    /// Index for email -> user ID lookup
    email_index: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            email_index: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a repository with initial users
    pub fn with_users(users: Vec<User>) -> Self {
        let mut users_map = HashMap::new();
        let mut email_map = HashMap::new();

        for user in users {
            let id = user.id().as_str().to_string();
            email_map.insert(user.email().to_string(), id.clone());
            users_map.insert(id, user);
        }

        Self {
            users: Arc::new(RwLock::new(users_map)),
            email_index: Arc::new(RwLock::new(email_map)),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(id.as_str()).cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        let email_index = self.email_index.read().await;

        Ok(email_index
            .get(email)
            .and_then(|user_id| users.get(user_id))
            .cloned())
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        let mut email_index = self.email_index.write().await;

        let id = user.id().as_str().to_string();
        let email = user.email().to_string();

        if users.contains_key(&id) {
            return Err(DomainError::conflict(format!(
                "User with ID '{}' already exists",
                id
            )));
        }

        if email_index.contains_key(&email) {
            return Err(DomainError::conflict(format!(
                "Email '{}' is already registered",
                email
            )));
        }

        email_index.insert(email, id.clone());
        users.insert(id, user.clone());

        Ok(user)
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        let mut email_index = self.email_index.write().await;

        let id = user.id().as_str().to_string();

        let Some(old_user) = users.get(&id) else {
            return Err(DomainError::not_found(format!("User '{}' not found", id)));
        };

        let old_email = old_user.email().to_string();
        let new_email = user.email().to_string();

        // If the email changed, it must not belong to anyone else
        if old_email != new_email {
            if email_index.contains_key(&new_email) {
                return Err(DomainError::conflict(format!(
                    "Email '{}' is already registered",
                    new_email
                )));
            }

            email_index.remove(&old_email);
            email_index.insert(new_email, id.clone());
        }

        users.insert(id, user.clone());

        Ok(user.clone())
    }

    async fn delete(&self, id: &UserId) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        let mut email_index = self.email_index.write().await;

        if let Some(user) = users.remove(id.as_str()) {
            email_index.remove(user.email());
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        let email_index = self.email_index.read().await;
        Ok(email_index.contains_key(email))
    }
}
