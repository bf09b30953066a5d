//! Order Service - Business logic layer

use std::sync::Arc;

use domain_products::ProductRepository;
use tracing::instrument;
use validator::Validate;

use crate::error::{OrderError, OrderResult};
use crate::models::{CreateOrder, Order, OrderFilter, OrderWithProducts, UpdateOrder};
use crate::repository::OrderRepository;

/// Order operations, resolving product references on single-order reads
/// and writes
///
/// Listing returns raw product IDs. Product lookups go through the shared
/// product repository; there is no transaction spanning both collections.
pub struct OrderService<R: OrderRepository, P: ProductRepository> {
    repository: Arc<R>,
    products: Arc<P>,
}

impl<R: OrderRepository, P: ProductRepository> OrderService<R, P> {
    pub fn new(repository: R, products: Arc<P>) -> Self {
        Self {
            repository: Arc::new(repository),
            products,
        }
    }

    #[instrument(skip(self))]
    pub async fn list_orders(&self, filter: OrderFilter) -> OrderResult<Vec<Order>> {
        self.repository.list(filter).await
    }

    /// Get an order with resolved products. A missing order is `Ok(None)`.
    #[instrument(skip(self))]
    pub async fn get_order(&self, id: &str) -> OrderResult<Option<OrderWithProducts>> {
        let id = require_id(id)?;

        match self.repository.get_by_id(id).await? {
            Some(order) => Ok(Some(self.resolve(order).await?)),
            None => Ok(None),
        }
    }

    #[instrument(skip(self, input))]
    pub async fn create_order(&self, input: CreateOrder) -> OrderResult<OrderWithProducts> {
        input.validate()?;

        let order = self.repository.create(input).await?;
        self.resolve(order).await
    }

    /// Shallow-merge `input` onto the stored order and persist it
    #[instrument(skip(self, input))]
    pub async fn update_order(&self, id: &str, input: UpdateOrder) -> OrderResult<OrderWithProducts> {
        let id = require_id(id)?;
        input.validate()?;

        let mut order = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))?;

        order.apply_update(input);

        let order = self.repository.update(order).await?;
        self.resolve(order).await
    }

    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: &str) -> OrderResult<()> {
        let id = require_id(id)?;

        if !self.repository.delete(id).await? {
            return Err(OrderError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn resolve(&self, order: Order) -> OrderResult<OrderWithProducts> {
        let ids = order.product_ids();
        if ids.is_empty() {
            return Ok(order.with_products(Vec::new()));
        }

        let found = self.products.get_by_ids(&ids).await?;
        if found.len() < ids.len() {
            tracing::debug!(
                order_id = %order.id,
                missing = ids.len() - found.len(),
                "Order references products that no longer exist"
            );
        }

        Ok(order.with_products(found))
    }
}

impl<R: OrderRepository, P: ProductRepository> Clone for OrderService<R, P> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            products: Arc::clone(&self.products),
        }
    }
}

/// Blank ids are rejected; any other id is looked up exactly as given
fn require_id(id: &str) -> OrderResult<&str> {
    if id.trim().is_empty() {
        return Err(OrderError::Validation("Order ID is required".to_string()));
    }
    Ok(id)
}
