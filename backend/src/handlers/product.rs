//! HTTP handlers for the product catalog

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::product::{CreateProductInput, Product, UpdateProductInput};
use crate::services::ProductService;
use crate::AppState;

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Create a product
pub async fn create_product(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<CreateProductInput>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let service = ProductService::new(state.db);
    let product = service.create(input).await?;

    tracing::info!(user = %current_user.0.email, product = %product.id, "product created");

    Ok((StatusCode::CREATED, Json(product)))
}

/// List all products
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let service = ProductService::new(state.db);
    let products = service.list().await?;

    Ok(Json(products))
}

/// Update a product
///
/// Stock fields set through here bypass the ledger; the acting user is
/// logged for that reason.
pub async fn update_product(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(product_id): Path<Uuid>,
    Json(input): Json<UpdateProductInput>,
) -> AppResult<Json<Product>> {
    let stock_touched = input.current_stock.is_some() || input.min_stock.is_some();

    let service = ProductService::new(state.db);
    let product = service.update(product_id, input).await?;

    if stock_touched {
        tracing::info!(
            user = %current_user.0.email,
            product = %product.id,
            current_stock = product.current_stock,
            "stock levels set directly, bypassing the ledger"
        );
    }

    Ok(Json(product))
}

/// Delete a product
pub async fn delete_product(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(product_id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    let service = ProductService::new(state.db);
    service.delete(product_id).await?;

    tracing::info!(user = %current_user.0.email, product = %product_id, "product deleted");

    Ok(Json(MessageResponse {
        message: "Product deleted".to_string(),
    }))
}
