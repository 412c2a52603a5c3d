use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use axum_helpers::{ErrorResponse, OptionalJson};
use serde_json::Value;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::InventoryResult;
use crate::models::{CreateProductRequest, ProductCreated};
use crate::repository::InventoryRepository;
use crate::service::ProductService;

pub const TAG: &str = "Products";

/// OpenAPI documentation for the products API
#[derive(OpenApi)]
#[openapi(
    paths(create_product),
    components(schemas(CreateProductRequest, ProductCreated, ErrorResponse)),
    tags(
        (name = TAG, description = "Product creation with initial stock")
    )
)]
pub struct ApiDoc;

/// Create the product router. Mounted by the app under `/api/products`.
pub fn router<R: InventoryRepository + 'static>(service: ProductService<R>) -> Router {
    Router::new()
        .route("/", post(create_product))
        .with_state(Arc::new(service))
}

/// Create a product together with its initial inventory
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created successfully", body = ProductCreated),
        (status = 400, description = "Validation failure or constraint violation", body = ErrorResponse),
        (status = 404, description = "Warehouse not found", body = ErrorResponse),
        (status = 409, description = "SKU already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn create_product<R: InventoryRepository>(
    State(service): State<Arc<ProductService<R>>>,
    OptionalJson(payload): OptionalJson<Value>,
) -> InventoryResult<(StatusCode, Json<ProductCreated>)> {
    let created = service.create_product(payload).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}
