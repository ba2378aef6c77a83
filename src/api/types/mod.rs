//! Shared API types

pub mod error;
pub mod payload;

pub use error::{ApiError, MessageKey};
pub use payload::Payload;
