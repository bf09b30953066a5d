//! Shared application state.

use mongodb::{Client, Database};

/// Handles passed to the route builders. Cloning shares the connection pool.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub mongo_client: Client,
    pub db: Database,
}
