//! MongoDB implementation of OrderRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::{FindOptions, IndexOptions},
    Collection, Database, IndexModel,
};
use tracing::instrument;

use crate::error::{OrderError, OrderResult};
use crate::models::{CreateOrder, Order, OrderFilter};
use crate::repository::OrderRepository;

/// Default collection name for orders
pub const COLLECTION_NAME: &str = "orders";

pub struct MongoOrderRepository {
    collection: Collection<Order>,
}

impl MongoOrderRepository {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, COLLECTION_NAME)
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<Order>(collection_name),
        }
    }

    /// Create the indexes backing the `productId` and `status` filters
    pub async fn init_indexes(&self) -> OrderResult<()> {
        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "products": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_products".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "status": 1 })
                .options(IndexOptions::builder().name("idx_status".to_string()).build())
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Order indexes created successfully");
        Ok(())
    }

    fn build_filter(filter: &OrderFilter) -> Document {
        let mut doc = doc! {};

        // Matches any element of the products array
        if let Some(ref product_id) = filter.product_id {
            doc.insert("products", product_id.as_str());
        }

        if let Some(status) = filter.status {
            doc.insert("status", status.to_string());
        }

        doc
    }
}

#[async_trait]
impl OrderRepository for MongoOrderRepository {
    #[instrument(skip(self, input), fields(product_count = input.products.len()))]
    async fn create(&self, input: CreateOrder) -> OrderResult<Order> {
        let order = Order::new(input);

        self.collection.insert_one(&order).await?;

        tracing::info!(order_id = %order.id, "Order created successfully");
        Ok(order)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> OrderResult<Option<Order>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: OrderFilter) -> OrderResult<Vec<Order>> {
        let options = FindOptions::builder()
            .sort(doc! { "_id": 1 })
            .skip(filter.offset)
            .limit(filter.limit)
            .build();

        let orders: Vec<Order> = self
            .collection
            .find(Self::build_filter(&filter))
            .with_options(options)
            .await?
            .try_collect()
            .await?;

        Ok(orders)
    }

    #[instrument(skip(self, order), fields(order_id = %order.id, status = %order.status))]
    async fn update(&self, order: Order) -> OrderResult<Order> {
        let result = self
            .collection
            .replace_one(doc! { "_id": order.id.as_str() }, &order)
            .await?;

        if result.matched_count == 0 {
            return Err(OrderError::NotFound(order.id));
        }

        tracing::info!(order_id = %order.id, "Order updated successfully");
        Ok(order)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> OrderResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        let deleted = result.deleted_count > 0;
        if deleted {
            tracing::info!(order_id = %id, "Order deleted successfully");
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderStatus;

    #[test]
    fn test_build_filter_empty() {
        let doc = MongoOrderRepository::build_filter(&OrderFilter::default());
        assert!(doc.is_empty());
    }

    #[test]
    fn test_build_filter_combines_product_and_status() {
        let filter = OrderFilter {
            product_id: Some("p1".to_string()),
            status: Some(OrderStatus::Pending),
            ..Default::default()
        };

        assert_eq!(
            MongoOrderRepository::build_filter(&filter),
            doc! { "products": "p1", "status": "PENDING" }
        );
    }
}
