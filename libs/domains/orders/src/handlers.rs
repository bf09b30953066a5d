//! HTTP handlers for Orders API

use axum::{
    extract::State,
    http::StatusCode,
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
use domain_products::ProductRepository;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::OrderResult;
use crate::models::{
    CreateOrder, Order, OrderFilter, OrderStatus, OrderWithProducts, ProductRef, UpdateOrder,
};
use crate::repository::OrderRepository;
use crate::service::OrderService;

type SharedService<R, P> = Arc<OrderService<R, P>>;

/// OpenAPI documentation for Orders API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_orders,
        create_order,
        get_order,
        update_order,
        patch_order,
        delete_order,
    ),
    components(
        schemas(
            Order, OrderWithProducts, ProductRef, CreateOrder, UpdateOrder, OrderFilter,
            OrderStatus
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Orders", description = "Order endpoints")
    )
)]
pub struct ApiDoc;

/// Create the orders router with all HTTP endpoints
pub fn router<R, P>(service: OrderService<R, P>) -> Router
where
    R: OrderRepository + 'static,
    P: ProductRepository + 'static,
{
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route(
            "/{id}",
            get(get_order)
                .put(update_order)
                .patch(patch_order)
                .delete(delete_order),
        )
        .with_state(Arc::new(service))
}

/// List orders, optionally filtered by product and status
///
/// Products are returned as IDs, not resolved.
#[utoipa::path(
    get,
    path = "",
    tag = "Orders",
    params(OrderFilter),
    responses(
        (status = 200, description = "Page of orders ordered by ID", body = Vec<Order>),
        (status = 400, description = "Unknown status value or malformed paging"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_orders<R: OrderRepository, P: ProductRepository>(
    State(service): State<SharedService<R, P>>,
    QueryParams(filter): QueryParams<OrderFilter>,
) -> OrderResult<Json<Vec<Order>>> {
    let orders = service.list_orders(filter).await?;
    Ok(Json(orders))
}

/// Create a new order
#[utoipa::path(
    post,
    path = "",
    tag = "Orders",
    request_body = CreateOrder,
    responses(
        (status = 200, description = "Order created", body = OrderWithProducts),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_order<R: OrderRepository, P: ProductRepository>(
    State(service): State<SharedService<R, P>>,
    ValidatedJson(input): ValidatedJson<CreateOrder>,
) -> OrderResult<Json<OrderWithProducts>> {
    let order = service.create_order(input).await?;
    Ok(Json(order))
}

/// Get an order with its products resolved
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Orders",
    params(
        ("id" = String, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order found", body = OrderWithProducts),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_order<R: OrderRepository, P: ProductRepository>(
    State(service): State<SharedService<R, P>>,
    IdPath(id): IdPath,
) -> OrderResult<Response> {
    match service.get_order(&id).await? {
        Some(order) => Ok(Json(order).into_response()),
        None => Ok(not_found().await),
    }
}

/// Edit an order
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Orders",
    params(
        ("id" = String, Path, description = "Order ID")
    ),
    request_body = UpdateOrder,
    responses(
        (status = 200, description = "Order updated", body = OrderWithProducts),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_order<R: OrderRepository, P: ProductRepository>(
    State(service): State<SharedService<R, P>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateOrder>,
) -> OrderResult<Json<OrderWithProducts>> {
    let order = service.update_order(&id, input).await?;
    Ok(Json(order))
}

/// Partially update an order (same semantics as PUT)
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Orders",
    params(
        ("id" = String, Path, description = "Order ID")
    ),
    request_body = UpdateOrder,
    responses(
        (status = 200, description = "Order updated", body = OrderWithProducts),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn patch_order<R: OrderRepository, P: ProductRepository>(
    state: State<SharedService<R, P>>,
    id: IdPath,
    input: ValidatedJson<UpdateOrder>,
) -> OrderResult<Json<OrderWithProducts>> {
    update_order(state, id, input).await
}

/// Delete an order
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Orders",
    params(
        ("id" = String, Path, description = "Order ID")
    ),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_order<R: OrderRepository, P: ProductRepository>(
    State(service): State<SharedService<R, P>>,
    IdPath(id): IdPath,
) -> OrderResult<StatusCode> {
    service.delete_order(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
