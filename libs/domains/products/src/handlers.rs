//! HTTP handlers for Products API

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::handlers::not_found,
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse,
    },
    IdPath, QueryParams, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{
    CreateProduct, DeleteResponse, ImageUrls, Product, ProductFilter, ProductLinks, ProductUser,
    Tag, UpdateProduct,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        patch_product,
        delete_product,
    ),
    components(
        schemas(
            Product, CreateProduct, UpdateProduct, ProductFilter, DeleteResponse,
            ImageUrls, ProductLinks, ProductUser, Tag
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalogue endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product)
                .put(update_product)
                .patch(patch_product)
                .delete(delete_product),
        )
        .with_state(shared_service)
}

/// List products, optionally filtered by tag
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ProductFilter),
    responses(
        (status = 200, description = "Page of products ordered by ID", body = Vec<Product>),
        (status = 400, description = "Malformed query parameters"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    QueryParams(filter): QueryParams<ProductFilter>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list_products(filter).await?;
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 200, description = "Product created", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<Json<Product>> {
    let product = service.create_product(input).await?;
    Ok(Json(product))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<Response> {
    match service.get_product(&id).await? {
        Some(product) => Ok(Json(product).into_response()),
        None => Ok(not_found().await),
    }
}

/// Replace fields of a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> ProductResult<Json<Product>> {
    let product = service.update_product(&id, input).await?;
    Ok(Json(product))
}

/// Partially update a product (same semantics as PUT)
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn patch_product<R: ProductRepository>(
    state: State<Arc<ProductService<R>>>,
    id: IdPath,
    input: ValidatedJson<UpdateProduct>,
) -> ProductResult<Json<Product>> {
    update_product(state, id, input).await
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = DeleteResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<Json<DeleteResponse>> {
    let response = service.delete_product(&id).await?;
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProductError;
    use crate::repository::MockProductRepository;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn json_body(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn product_json() -> Value {
        json!({
            "likes": 0,
            "urls": { "regular": "r", "small": "s", "thumb": "t" },
            "links": { "self": "x", "html": "y" },
            "user": { "id": "u1", "first_name": "A", "username": "a" }
        })
    }

    fn stored_product(id: &str) -> Product {
        let mut value = product_json();
        value["_id"] = json!(id);
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn test_list_products_coerces_query_params() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_list()
            .withf(|filter| {
                filter.offset == 10 && filter.limit == 5 && filter.tag.as_deref() == Some("bike")
            })
            .returning(|_| Ok(vec![stored_product("p1")]));

        let app = router(ProductService::new(mock_repo));
        let response = app
            .oneshot(
                Request::get("/?offset=10&limit=5&tag=bike")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body[0]["_id"], "p1");
    }

    #[tokio::test]
    async fn test_list_products_uses_default_page() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_list()
            .withf(|filter| filter.offset == 0 && filter.limit == 25 && filter.tag.is_none())
            .returning(|_| Ok(vec![]));

        let app = router(ProductService::new(mock_repo));
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_empty_tag_is_no_filter() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_list()
            .withf(|filter| filter.tag.is_none())
            .times(1)
            .returning(|_| Ok(vec![stored_product("p1")]));

        let app = router(ProductService::new(mock_repo));
        let response = app
            .oneshot(Request::get("/?tag=").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_malformed_limit_is_json_400() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_list().never();

        let app = router(ProductService::new(mock_repo));
        let response = app
            .oneshot(Request::get("/?limit=abc").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"], "INVALID_QUERY");
    }

    #[tokio::test]
    async fn test_get_missing_product_returns_404() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));

        let app = router(ProductService::new(mock_repo));
        let response = app
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_product_returns_body_with_id() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_create()
            .returning(|input| Ok(Product::new(input)));

        let app = router(ProductService::new(mock_repo));
        let response = app
            .oneshot(
                Request::post("/")
                    .header("content-type", "application/json")
                    .body(Body::from(product_json().to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert!(body["_id"].as_str().is_some_and(|id| !id.is_empty()));
        assert_eq!(body["user"]["username"], "a");
    }

    #[tokio::test]
    async fn test_create_product_with_empty_required_field_is_400() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_create().never();

        let mut payload = product_json();
        payload["user"]["first_name"] = json!("");

        let app = router(ProductService::new(mock_repo));
        let response = app
            .oneshot(
                Request::post("/")
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_patch_product_merges_change() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(Some(stored_product(id))));
        mock_repo.expect_update().returning(Ok);

        let app = router(ProductService::new(mock_repo));
        let response = app
            .oneshot(
                Request::patch("/p1")
                    .header("content-type", "application/json")
                    .body(Body::from(json!({ "likes": 9 }).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["likes"], 9);
        assert_eq!(body["urls"]["thumb"], "t");
    }

    #[tokio::test]
    async fn test_delete_product_returns_message() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_delete().returning(|_| Ok(true));

        let app = router(ProductService::new(mock_repo));
        let response = app
            .oneshot(Request::delete("/p1").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({ "message": "Product deleted successfully" })
        );
    }

    #[tokio::test]
    async fn test_delete_unknown_product_is_404() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_delete().returning(|_| Ok(false));

        let app = router(ProductService::new(mock_repo));
        let response = app
            .oneshot(Request::delete("/unknown").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_store_failure_is_500() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_list()
            .returning(|_| Err(ProductError::Database("connection refused".to_string())));

        let app = router(ProductService::new(mock_repo));
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
