//! Database connectors and utilities
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB connector and health checks
//! - `config` - `core_config::FromEnv` support for connection settings
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::mongodb::{MongoConfig, connect_database};
//!
//! let config = MongoConfig::from_env()?;
//! let (client, db) = connect_database(&config, None).await?;
//! let products = db.collection::<Product>("products");
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{RetryConfig, retry, retry_with_backoff};
