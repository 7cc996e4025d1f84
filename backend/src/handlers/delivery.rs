//! HTTP handlers for the stock ledger

use axum::{extract::State, http::StatusCode, Json};

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::delivery::{Delivery, DeliveryWithProduct, RecordDeliveryInput};
use crate::services::DeliveryService;
use crate::AppState;

/// Record a stock movement
pub async fn record_delivery(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<RecordDeliveryInput>,
) -> AppResult<(StatusCode, Json<Delivery>)> {
    let service = DeliveryService::new(state.db);
    let delivery = service.record(input).await?;

    tracing::info!(
        user = %current_user.0.email,
        delivery = %delivery.id,
        product = %delivery.product_id,
        delivery_type = %delivery.delivery_type,
        quantity = delivery.quantity,
        "stock movement recorded"
    );

    Ok((StatusCode::CREATED, Json(delivery)))
}

/// List the ledger, resolved with products
pub async fn list_deliveries(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<DeliveryWithProduct>>> {
    let service = DeliveryService::new(state.db);
    let deliveries = service.list().await?;

    Ok(Json(deliveries))
}
