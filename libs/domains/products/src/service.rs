//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, DeleteResponse, Product, ProductFilter, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service providing the CRUD operations exposed over HTTP
///
/// Each operation performs at most two repository calls. There is no locking:
/// concurrent edits of the same product are last-writer-wins.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List products sorted by ID, optionally restricted to a tag
    #[instrument(skip(self))]
    pub async fn list_products(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        self.repository.list(filter).await
    }

    /// Get a product by ID. A missing product is `Ok(None)`, not an error.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Option<Product>> {
        let id = require_id(id)?;
        self.repository.get_by_id(id).await
    }

    /// Create a new product
    #[instrument(skip(self, input))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input.validate()?;
        self.repository.create(input).await
    }

    /// Shallow-merge `input` onto the stored product and persist it
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: &str, input: UpdateProduct) -> ProductResult<Product> {
        let id = require_id(id)?;
        input.validate()?;

        let mut product = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;

        product.apply_update(input);

        self.repository.update(product).await
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<DeleteResponse> {
        let id = require_id(id)?;

        if !self.repository.delete(id).await? {
            return Err(ProductError::NotFound(id.to_string()));
        }

        Ok(DeleteResponse::product_deleted())
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

/// Blank ids are rejected; any other id is looked up exactly as given
fn require_id(id: &str) -> ProductResult<&str> {
    if id.trim().is_empty() {
        return Err(ProductError::Validation("Product ID is required".to_string()));
    }
    Ok(id)
}
