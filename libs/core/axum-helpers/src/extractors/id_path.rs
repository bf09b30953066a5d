//! Opaque identifier path parameter extractor.

use crate::errors::{ErrorCode, ErrorResponse};
use axum::{
    Json,
    extract::{FromRequestParts, Path},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};

/// Extractor for string identifiers in the path (`/{id}`).
///
/// Document IDs are opaque strings, so no format is enforced beyond
/// rejecting a blank segment. The segment is passed on as given.
///
/// ```ignore
/// use axum::{Router, routing::get};
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_order(IdPath(id): IdPath) -> String {
///     format!("Order ID: {}", id)
/// }
///
/// let app = Router::new().route("/orders/{id}", get(get_order));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdPath(pub String);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        if id.trim().is_empty() {
            let code = ErrorCode::InvalidId;
            let body = ErrorResponse::new(code, code.default_message());
            return Err((StatusCode::BAD_REQUEST, Json(body)).into_response());
        }

        Ok(IdPath(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, routing::get};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new().route("/items/{id}", get(|IdPath(id): IdPath| async move { id }))
    }

    #[tokio::test]
    async fn test_extracts_opaque_id() {
        let response = app()
            .oneshot(
                Request::get("/items/0192f0c1-a1b2-7c3d")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"0192f0c1-a1b2-7c3d");
    }

    #[tokio::test]
    async fn test_keeps_surrounding_whitespace() {
        let response = app()
            .oneshot(Request::get("/items/%20p1").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b" p1");
    }

    #[tokio::test]
    async fn test_rejects_blank_id() {
        let response = app()
            .oneshot(Request::get("/items/%20").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
