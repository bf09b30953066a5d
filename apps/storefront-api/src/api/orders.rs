//! Orders API routes
//!
//! Orders resolve product references through their own product repository
//! handle on the same database.

use std::sync::Arc;

use axum::Router;
use domain_orders::{MongoOrderRepository, OrderService, handlers};

use crate::state::AppState;

pub fn repository(state: &AppState) -> MongoOrderRepository {
    MongoOrderRepository::new(&state.db)
}

pub fn router(state: &AppState) -> Router {
    let products = Arc::new(super::products::repository(state));
    handlers::router(OrderService::new(repository(state), products))
}
