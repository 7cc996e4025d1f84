//! HTTP handlers for the sales register

use axum::{extract::State, http::StatusCode, Json};

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::sale::{RecordSaleInput, Sale, SaleWithProduct};
use crate::services::SaleService;
use crate::AppState;

/// Record a sale
pub async fn record_sale(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<RecordSaleInput>,
) -> AppResult<(StatusCode, Json<Sale>)> {
    let service = SaleService::new(state.db);
    let sale = service.record(input).await?;

    tracing::info!(
        user = %current_user.0.email,
        sale = %sale.id,
        product = %sale.product_id,
        quantity = sale.quantity,
        "sale recorded"
    );

    Ok((StatusCode::CREATED, Json(sale)))
}

/// List all sales, resolved with products
pub async fn list_sales(State(state): State<AppState>) -> AppResult<Json<Vec<SaleWithProduct>>> {
    let service = SaleService::new(state.db);
    let sales = service.list().await?;

    Ok(Json(sales))
}
