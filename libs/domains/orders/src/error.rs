use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use domain_products::ProductError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type OrderResult<T> = Result<T, OrderError>;

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::NotFound(id) => AppError::NotFound(format!("Order {} not found", id)),
            OrderError::Validation(msg) => AppError::BadRequest(msg),
            OrderError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for OrderError {
    fn from(err: mongodb::error::Error) -> Self {
        OrderError::Database(err.to_string())
    }
}

impl From<validator::ValidationErrors> for OrderError {
    fn from(err: validator::ValidationErrors) -> Self {
        OrderError::Validation(err.to_string())
    }
}

/// Failures while resolving product references
impl From<ProductError> for OrderError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => {
                OrderError::Database(format!("referenced product {} vanished", id))
            }
            ProductError::Validation(msg) => OrderError::Validation(msg),
            ProductError::Database(msg) => OrderError::Database(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_codes() {
        let cases = [
            (OrderError::NotFound("o1".into()), StatusCode::NOT_FOUND),
            (
                OrderError::Validation("Order ID is required".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                OrderError::Database("connection reset".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_product_store_failure_is_database_error() {
        let err: OrderError = ProductError::Database("timeout".into()).into();
        assert!(matches!(err, OrderError::Database(msg) if msg == "timeout"));
    }
}
