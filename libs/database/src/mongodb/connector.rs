use mongodb::{Client, Database, bson::doc, options::ClientOptions};
use tracing::info;

use super::MongoConfig;
use crate::common::{RetryConfig, retry, retry_with_backoff};

/// Error type for MongoDB connections
#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

/// Round-trip a `ping` through the admin database
pub async fn ping(client: &Client) -> Result<(), MongoError> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| MongoError::ConnectionFailed(e.to_string()))?;
    Ok(())
}

/// Connect with the given settings and verify the server answers.
///
/// ```ignore
/// use database::mongodb::{MongoConfig, connect_from_config};
///
/// let config = MongoConfig::new("mongodb://localhost:27017", "storefront");
/// let client = connect_from_config(&config).await?;
/// let db = client.database(&config.database);
/// ```
pub async fn connect_from_config(config: &MongoConfig) -> Result<Client, MongoError> {
    info!(database = %config.database, "Connecting to MongoDB");

    let mut options = ClientOptions::parse(&config.url).await?;
    config.apply_to(&mut options);

    let client = Client::with_options(options)?;
    ping(&client).await?;

    info!("Successfully connected to MongoDB");
    Ok(client)
}

/// [`connect_from_config`] retried with exponential backoff.
///
/// `None` uses the default policy (3 retries starting at 100ms).
pub async fn connect_from_config_with_retry(
    config: &MongoConfig,
    retry_config: Option<RetryConfig>,
) -> Result<Client, MongoError> {
    match retry_config {
        Some(policy) => retry_with_backoff(|| connect_from_config(config), policy).await,
        None => retry(|| connect_from_config(config)).await,
    }
}

/// Connect (with retry) and return both the client and the configured database.
pub async fn connect_database(
    config: &MongoConfig,
    retry_config: Option<RetryConfig>,
) -> Result<(Client, Database), MongoError> {
    let client = connect_from_config_with_retry(config, retry_config).await?;
    let db = client.database(&config.database);
    Ok((client, db))
}
