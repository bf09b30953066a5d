use async_trait::async_trait;

use crate::error::OrderResult;
use crate::models::{CreateOrder, Order, OrderFilter};

/// Data access interface for orders
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Construct and persist a new order
    async fn create(&self, input: CreateOrder) -> OrderResult<Order>;

    async fn get_by_id(&self, id: &str) -> OrderResult<Option<Order>>;

    /// List orders sorted by ascending ID. Filters are ANDed.
    async fn list(&self, filter: OrderFilter) -> OrderResult<Vec<Order>>;

    /// Replace the stored document. `NotFound` if no document has its ID.
    async fn update(&self, order: Order) -> OrderResult<Order>;

    /// Delete by ID, returning whether a document was removed
    async fn delete(&self, id: &str) -> OrderResult<bool>;
}
