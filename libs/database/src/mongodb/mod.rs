//! MongoDB connection management and health checks

mod config;
mod connector;
mod health;

pub use config::MongoConfig;
pub use connector::{
    MongoError, connect_database, connect_from_config, connect_from_config_with_retry, ping,
};
pub use health::{HealthStatus, check_health_detailed};

pub use mongodb::{Client, Collection, Database};
