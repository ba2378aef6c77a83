//! User service for registration, login and record management

use std::sync::Arc;

use tracing::debug;

use crate::domain::user::{LoginRequest, RegisterRequest, UpdateUserRequest, User, UserId, UserRepository};
use crate::domain::DomainError;

use super::password::PasswordHasher;

const EMAIL_TAKEN: &str = "This email has already been registered.";

/// User service over a repository and a password hasher
#[derive(Debug)]
pub struct UserService<R: UserRepository, H: PasswordHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: UserRepository, H: PasswordHasher> UserService<R, H> {
    /// Create a new user service
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// List all users
    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.repository.list().await
    }

    /// Get a user by ID
    pub async fn get(&self, id: &str) -> Result<Option<User>, DomainError> {
        self.repository.get(&UserId::from(id)).await
    }

    /// Register a new user. The email must not be registered yet.
    pub async fn register(&self, request: RegisterRequest) -> Result<User, DomainError> {
        if self.repository.email_exists(&request.email).await? {
            return Err(DomainError::conflict(EMAIL_TAKEN));
        }

        let password_hash = self.hasher.hash(&request.password)?;
        let user = User::new(request.username, request.email, password_hash);

        debug!(user_id = %user.id(), "Registering user");

        // A concurrent registration may have claimed the email since the check
        self.repository
            .create(user)
            .await
            .map_err(email_conflict)
    }

    /// Compare a candidate password against the stored one for `email`.
    /// Unknown emails never match.
    pub async fn compare_password(&self, email: &str, password: &str) -> Result<bool, DomainError> {
        let Some(user) = self.repository.get_by_email(email).await? else {
            return Ok(false);
        };

        Ok(self.hasher.verify(password, user.password_hash()))
    }

    /// Authenticate by email and password, returning the stored record
    pub async fn login(&self, request: LoginRequest) -> Result<User, DomainError> {
        let user = self
            .repository
            .get_by_email(&request.email)
            .await?
            .ok_or_else(|| DomainError::not_found("No user exists with the email provided."))?;

        if !self.compare_password(&request.email, &request.password).await? {
            return Err(DomainError::validation("Incorrect Password"));
        }

        Ok(user)
    }

    /// Replace username, email and password of an existing user
    pub async fn update(&self, id: &str, request: UpdateUserRequest) -> Result<User, DomainError> {
        let mut user = self
            .repository
            .get(&UserId::from(id))
            .await?
            .ok_or_else(|| DomainError::not_found(format!("No user with id {}", id)))?;

        if user.email() != request.email && self.repository.email_exists(&request.email).await? {
            return Err(DomainError::conflict(EMAIL_TAKEN));
        }

        let password_hash = self.hasher.hash(&request.password)?;

        user.set_username(request.username);
        user.set_email(request.email);
        user.set_password_hash(password_hash);

        self.repository
            .update(&user)
            .await
            .map_err(email_conflict)
    }

    /// Delete a user
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let user_id = UserId::from(id);

        if self.repository.get(&user_id).await?.is_none() {
            return Err(DomainError::not_found("User does not exist"));
        }

        if !self.repository.delete(&user_id).await? {
            return Err(DomainError::not_found("User does not exist"));
        }

        Ok(())
    }
}

fn email_conflict(err: DomainError) -> DomainError {
    match err {
        DomainError::Conflict { .. } => DomainError::conflict(EMAIL_TAKEN),
        other => other,
    }
}
