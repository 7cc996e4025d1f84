//! Dashboard aggregation service
//!
//! Read-only rollup over the catalog, ledger, orders, and sales, computed
//! on demand with no caching. The sales value figure is a bounded window:
//! it sums only the most recently dated sales, not the all-time total.

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::services::delivery::{DeliveryService, DeliveryWithProduct};
use crate::services::sale::{SaleService, SaleWithProduct};
use shared::validation::parse_total;

/// Number of recent sales and deliveries included in the summary
const RECENT_WINDOW: i64 = 5;

/// Dashboard aggregation service
#[derive(Clone)]
pub struct DashboardService {
    db: PgPool,
}

/// Aggregate summary computed per request
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub total_products: i64,
    pub low_stock_count: i64,
    pub total_sales_value: Decimal,
    pub active_orders: i64,
    pub recent_sales: Vec<SaleWithProduct>,
    pub recent_deliveries: Vec<DeliveryWithProduct>,
}

impl DashboardService {
    /// Create a new DashboardService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Compute the dashboard summary
    pub async fn summary(&self) -> AppResult<DashboardSummary> {
        let total_products = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(&self.db)
            .await?;

        // Field-to-field comparison per product
        let low_stock_count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM products WHERE current_stock <= min_stock",
        )
        .fetch_one(&self.db)
        .await?;

        let active_orders = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM orders WHERE status <> 'completed'",
        )
        .fetch_one(&self.db)
        .await?;

        let recent_sales = SaleService::new(self.db.clone())
            .list_recent(RECENT_WINDOW)
            .await?;
        let recent_deliveries = DeliveryService::new(self.db.clone())
            .list_recent(RECENT_WINDOW)
            .await?;

        // Stored totals are validated on write, so a parse failure here
        // means the data itself is damaged
        let mut total_sales_value = Decimal::ZERO;
        for sale in &recent_sales {
            let amount = parse_total(&sale.sale.total).ok_or_else(|| {
                AppError::Internal(format!(
                    "Stored sale total is not a decimal: {}",
                    sale.sale.total
                ))
            })?;
            total_sales_value += amount;
        }
        let mut total_sales_value = total_sales_value.round_dp(2);
        total_sales_value.rescale(2);

        Ok(DashboardSummary {
            total_products,
            low_stock_count,
            total_sales_value,
            active_orders,
            recent_sales,
            recent_deliveries,
        })
    }
}
