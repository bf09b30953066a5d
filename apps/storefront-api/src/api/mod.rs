//! API routes, nested under /api by `axum_helpers::create_router`

pub mod health;
pub mod orders;
pub mod products;

use axum::Router;

use crate::state::AppState;

pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/products", products::router(state))
        .nest("/orders", orders::router(state))
        .merge(health::router(state.mongo_client.clone()))
}

/// Create the indexes backing the list filters
pub async fn init_indexes(state: &AppState) -> eyre::Result<()> {
    products::repository(state).init_indexes().await?;
    orders::repository(state).init_indexes().await?;
    Ok(())
}
