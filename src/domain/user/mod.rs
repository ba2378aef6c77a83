//! User domain
//!
//! This module provides the user entity, the repository trait backing it,
//! and the request schemas validated by the register, login and update
//! endpoints.

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserId};
pub use repository::UserRepository;
pub use validation::{
    validate_email, LoginRequest, RegisterRequest, UpdateUserRequest, UserValidationError,
};

#[cfg(test)]
pub use repository::MockUserRepository;
