//! Product catalogue endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Payload};
use crate::domain::product::{CreateProductRequest, Product, UpdateProductRequest};

/// List products response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProductsResponse {
    pub total: usize,
    pub all_products: Vec<Product>,
}

/// Single product response
#[derive(Debug, Clone, Serialize)]
pub struct ProductResponse {
    pub product: Product,
}

/// Creation response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProductResponse {
    pub new_product: Product,
}

/// Update response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedProductResponse {
    pub updated_product: Product,
}

/// Create the product router
pub fn create_product_router() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/product", post(create_product))
        .route(
            "/product/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// GET /products
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<ListProductsResponse>, ApiError> {
    debug!("Listing products");

    let all_products = state.product_service.list().await?;

    if all_products.is_empty() {
        return Err(ApiError::not_found("No Products found"));
    }

    Ok(Json(ListProductsResponse {
        total: all_products.len(),
        all_products,
    }))
}

/// GET /product/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponse>, ApiError> {
    debug!(product_id = %id, "Getting product");

    let product = state
        .product_service
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product does not exist"))?;

    Ok(Json(ProductResponse { product }))
}

/// POST /product
pub async fn create_product(
    State(state): State<AppState>,
    Payload(body): Payload,
) -> Result<(StatusCode, Json<NewProductResponse>), ApiError> {
    let request = CreateProductRequest::from_payload(&body)?;
    debug!(name = %request.name, "Creating product");

    let new_product = state.product_service.create(request).await?;

    Ok((StatusCode::CREATED, Json(NewProductResponse { new_product })))
}

/// PUT /product/{id}
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Payload(body): Payload,
) -> Result<Json<UpdatedProductResponse>, ApiError> {
    let request = UpdateProductRequest::from_payload(&body)?;
    debug!(product_id = %id, "Updating product");

    let updated_product = state.product_service.update(&id, request).await?;

    Ok(Json(UpdatedProductResponse { updated_product }))
}

/// DELETE /product/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    debug!(product_id = %id, "Deleting product");

    state.product_service.delete(&id).await?;

    Ok(Json(json!({ "msg": "Product deleted.." })))
}
