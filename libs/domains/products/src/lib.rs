//! Products Domain
//!
//! Product catalogue stored in the `products` collection. Handlers call
//! [`ProductService`], which validates input and merges edits before going
//! through a [`ProductRepository`]. [`MongoProductRepository`] is the store
//! used in production; tests use the generated `MockProductRepository`.
//!
//! ```rust,no_run
//! use domain_products::{handlers, MongoProductRepository, ProductService};
//!
//! # async fn example(db: mongodb::Database) -> Result<(), domain_products::ProductError> {
//! let repository = MongoProductRepository::new(&db);
//! repository.init_indexes().await?;
//!
//! let router = handlers::router(ProductService::new(repository));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{
    CreateProduct, DeleteResponse, ImageUrls, Product, ProductFilter, ProductLinks, ProductUser,
    Tag, UpdateProduct,
};
pub use mongodb::MongoProductRepository;
pub use repository::ProductRepository;
pub use service::ProductService;
