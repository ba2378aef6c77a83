//! Product domain
//!
//! Product records, their store key, and the request schemas validated
//! before a product is created or changed.

mod entity;
mod validation;

pub use entity::{Product, ProductId};
pub use validation::{CreateProductRequest, ProductValidationError, UpdateProductRequest};
