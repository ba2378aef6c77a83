//! Domain layer - Core business logic and entities

pub mod error;
pub mod payload;
pub mod product;
pub mod storage;
pub mod user;

pub use error::DomainError;
pub use product::{Product, ProductId};
pub use storage::{Storage, StorageEntity, StorageKey};
pub use user::{User, UserId, UserRepository};
