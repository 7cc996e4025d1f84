//! HTTP handlers for production orders

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::order::{CreateOrderInput, Order, OrderWithProduct, RecordProductionInput};
use crate::services::OrderService;
use crate::AppState;

/// Create a production order
pub async fn create_order(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<CreateOrderInput>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let service = OrderService::new(state.db);
    let order = service.create(input).await?;

    tracing::info!(user = %current_user.0.email, order = %order.id, "production order created");

    Ok((StatusCode::CREATED, Json(order)))
}

/// List all orders, resolved with products
pub async fn list_orders(State(state): State<AppState>) -> AppResult<Json<Vec<OrderWithProduct>>> {
    let service = OrderService::new(state.db);
    let orders = service.list().await?;

    Ok(Json(orders))
}

/// Move a pending order into production
pub async fn advance_order(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(order_id): Path<Uuid>,
) -> AppResult<Json<Order>> {
    let service = OrderService::new(state.db);
    let order = service.advance(order_id).await?;

    tracing::info!(user = %current_user.0.email, order = %order.id, "order moved into production");

    Ok(Json(order))
}

/// Cancel an order
pub async fn cancel_order(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(order_id): Path<Uuid>,
) -> AppResult<Json<Order>> {
    let service = OrderService::new(state.db);
    let order = service.cancel(order_id).await?;

    tracing::info!(user = %current_user.0.email, order = %order.id, "order cancelled");

    Ok(Json(order))
}

/// Record a produced amount against an order
pub async fn record_production(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(order_id): Path<Uuid>,
    Json(input): Json<RecordProductionInput>,
) -> AppResult<Json<Order>> {
    let service = OrderService::new(state.db);
    let order = service.record_production(order_id, input.amount).await?;

    tracing::info!(
        user = %current_user.0.email,
        order = %order.id,
        produced = order.produced,
        status = %order.status,
        "production recorded"
    );

    Ok(Json(order))
}
