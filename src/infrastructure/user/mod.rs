//! User infrastructure module
//!
//! Password hashing with Argon2, the in-memory user store and the user
//! service the HTTP handlers call into.

mod password;
mod repository;
mod service;

pub use password::{Argon2Hasher, PasswordHasher};
pub use repository::InMemoryUserRepository;
pub use service::UserService;
