//! Application state for shared services

use std::sync::Arc;

use crate::domain::product::{CreateProductRequest, Product, UpdateProductRequest};
use crate::domain::storage::Storage;
use crate::domain::user::{LoginRequest, RegisterRequest, UpdateUserRequest, User, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::services::ProductService;
use crate::infrastructure::user::{PasswordHasher, UserService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub product_service: Arc<dyn ProductServiceTrait>,
}

impl AppState {
    pub fn new(
        user_service: Arc<dyn UserServiceTrait>,
        product_service: Arc<dyn ProductServiceTrait>,
    ) -> Self {
        Self {
            user_service,
            product_service,
        }
    }
}

/// Trait for user service operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, DomainError>;
    async fn get(&self, id: &str) -> Result<Option<User>, DomainError>;
    async fn register(&self, request: RegisterRequest) -> Result<User, DomainError>;
    async fn login(&self, request: LoginRequest) -> Result<User, DomainError>;
    async fn update(&self, id: &str, request: UpdateUserRequest) -> Result<User, DomainError>;
    async fn delete(&self, id: &str) -> Result<(), DomainError>;
}

/// Trait for product service operations
#[async_trait::async_trait]
pub trait ProductServiceTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, DomainError>;
    async fn get(&self, id: &str) -> Result<Option<Product>, DomainError>;
    async fn create(&self, request: CreateProductRequest) -> Result<Product, DomainError>;
    async fn update(&self, id: &str, request: UpdateProductRequest)
        -> Result<Product, DomainError>;
    async fn delete(&self, id: &str) -> Result<(), DomainError>;
}

#[async_trait::async_trait]
impl<R, H> UserServiceTrait for UserService<R, H>
where
    R: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    async fn list(&self) -> Result<Vec<User>, DomainError> {
        UserService::list(self).await
    }

    async fn get(&self, id: &str) -> Result<Option<User>, DomainError> {
        UserService::get(self, id).await
    }

    async fn register(&self, request: RegisterRequest) -> Result<User, DomainError> {
        UserService::register(self, request).await
    }

    async fn login(&self, request: LoginRequest) -> Result<User, DomainError> {
        UserService::login(self, request).await
    }

    async fn update(&self, id: &str, request: UpdateUserRequest) -> Result<User, DomainError> {
        UserService::update(self, id, request).await
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        UserService::delete(self, id).await
    }
}

#[async_trait::async_trait]
impl<S: Storage<Product> + 'static> ProductServiceTrait for ProductService<S> {
    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        ProductService::list(self).await
    }

    async fn get(&self, id: &str) -> Result<Option<Product>, DomainError> {
        ProductService::get(self, id).await
    }

    async fn create(&self, request: CreateProductRequest) -> Result<Product, DomainError> {
        ProductService::create(self, request).await
    }

    async fn update(
        &self,
        id: &str,
        request: UpdateProductRequest,
    ) -> Result<Product, DomainError> {
        ProductService::update(self, id, request).await
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        ProductService::delete(self, id).await
    }
}
