//! Orders Domain
//!
//! Orders reference products by ID. Single-order reads and writes return the
//! referenced product documents in place of the IDs; listing does not.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use domain_orders::{handlers, MongoOrderRepository, OrderService};
//! use domain_products::MongoProductRepository;
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("storefront");
//!
//! let orders = MongoOrderRepository::new(&db);
//! orders.init_indexes().await?;
//!
//! let products = Arc::new(MongoProductRepository::new(&db));
//! let router = handlers::router(OrderService::new(orders, products));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{OrderError, OrderResult};
pub use handlers::ApiDoc;
pub use models::{
    CreateOrder, Order, OrderFilter, OrderStatus, OrderWithProducts, ProductRef, UpdateOrder,
};
pub use mongodb::MongoOrderRepository;
pub use repository::OrderRepository;
pub use service::OrderService;
