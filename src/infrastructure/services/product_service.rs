//! Product service - CRUD operations for the product catalogue

use std::sync::Arc;

use tracing::debug;

use crate::domain::product::{CreateProductRequest, Product, ProductId, UpdateProductRequest};
use crate::domain::storage::Storage;
use crate::domain::DomainError;

/// Product service for CRUD operations
#[derive(Debug)]
pub struct ProductService<S: Storage<Product>> {
    storage: Arc<S>,
}

impl<S: Storage<Product>> ProductService<S> {
    /// Create a new ProductService with the given storage
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// List all products
    pub async fn list(&self) -> Result<Vec<Product>, DomainError> {
        self.storage.list().await
    }

    /// Get a product by ID
    pub async fn get(&self, id: &str) -> Result<Option<Product>, DomainError> {
        self.storage.get(&ProductId::from(id)).await
    }

    /// Create a new product
    pub async fn create(&self, request: CreateProductRequest) -> Result<Product, DomainError> {
        let product = Product::new(request);
        debug!(product_id = %product.id(), "Creating product");

        self.storage.create(product).await
    }

    /// Merge the supplied fields into an existing product
    pub async fn update(
        &self,
        id: &str,
        request: UpdateProductRequest,
    ) -> Result<Product, DomainError> {
        let mut product = self
            .storage
            .get(&ProductId::from(id))
            .await?
            .ok_or_else(|| DomainError::not_found("Product does not exist.."))?;

        if request.is_empty() {
            return Ok(product);
        }

        product.apply(request);

        self.storage.update(product).await
    }

    /// Delete a product
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let product_id = ProductId::from(id);

        let missing = || DomainError::not_found(format!("No Product with ID {}", id));

        if !self.storage.exists(&product_id).await? {
            return Err(missing());
        }

        if !self.storage.delete(&product_id).await? {
            return Err(missing());
        }

        Ok(())
    }
}
