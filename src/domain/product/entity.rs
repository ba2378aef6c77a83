//! Product entity

use serde::{Deserialize, Serialize};
use serde_json::Number;
use uuid::Uuid;

use super::validation::{CreateProductRequest, UpdateProductRequest};
use crate::domain::storage::{StorageEntity, StorageKey};

/// Store-assigned product identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Allocate a fresh identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for ProductId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// A product in the catalogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    /// Kept as the client sent it, so `4` stays `4` and `4.5` stays `4.5`
    price: Number,
    quantity: Number,
    /// Image reference, usually a URL
    image: String,
}

impl Product {
    /// Build a new product with a freshly generated id
    pub fn new(request: CreateProductRequest) -> Self {
        Self {
            id: ProductId::generate(),
            name: request.name,
            price: request.price,
            quantity: request.quantity,
            image: request.image,
        }
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> &Number {
        &self.price
    }

    pub fn quantity(&self) -> &Number {
        &self.quantity
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    /// Merge a partial update. The id never changes.
    pub fn apply(&mut self, changes: UpdateProductRequest) {
        if let Some(name) = changes.name {
            self.name = name;
        }

        if let Some(price) = changes.price {
            self.price = price;
        }

        if let Some(quantity) = changes.quantity {
            self.quantity = quantity;
        }

        if let Some(image) = changes.image {
            self.image = image;
        }
    }
}

impl StorageEntity for Product {
    type Key = ProductId;

    fn key(&self) -> &Self::Key {
        &self.id
    }
}
