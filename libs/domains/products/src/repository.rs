use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, ProductFilter};

/// Repository trait for Product persistence
///
/// This trait defines the data access interface for products.
/// Implementations can use different storage backends; the services only
/// rely on the operations below.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Construct and persist a new product
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    /// Fetch every product whose ID is in `ids`, in no particular order.
    /// IDs with no matching product are skipped.
    async fn get_by_ids(&self, ids: &[String]) -> ProductResult<Vec<Product>>;

    /// List products sorted by ascending ID
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>>;

    /// Replace the stored document with `product`.
    /// Fails with `NotFound` if no document has its ID.
    async fn update(&self, product: Product) -> ProductResult<Product>;

    /// Delete a product by ID, returning whether a document was removed
    async fn delete(&self, id: &str) -> ProductResult<bool>;
}
