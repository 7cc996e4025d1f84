//! Sales register service
//!
//! Recording a sale decrements the product's stock under the same row lock
//! the ledger uses, so a sale and its stock adjustment commit together.
//! Totals are persisted as text and validated to parse as decimal amounts
//! on the way in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::services::product::Product;
use shared::validation::parse_total;

/// Sales register service
#[derive(Clone)]
pub struct SaleService {
    db: PgPool,
}

/// A completed sale
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Sale {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: i64,
    pub customer: Option<String>,
    pub date: DateTime<Utc>,
    pub total: String,
}

/// A sale resolved with its product
#[derive(Debug, Clone, Serialize)]
pub struct SaleWithProduct {
    #[serde(flatten)]
    pub sale: Sale,
    pub product: Product,
}

/// Input for recording a sale
#[derive(Debug, Deserialize)]
pub struct RecordSaleInput {
    pub product_id: Uuid,
    pub quantity: i64,
    pub customer: Option<String>,
    pub total: String,
    pub date: Option<DateTime<Utc>>,
}

/// Row for sale queries joined with the product
#[derive(Debug, sqlx::FromRow)]
struct SaleProductRow {
    id: Uuid,
    product_id: Uuid,
    quantity: i64,
    customer: Option<String>,
    date: DateTime<Utc>,
    total: String,
    product_name: String,
    product_type: String,
    product_capacity: Option<String>,
    product_unit: String,
    product_current_stock: i64,
    product_min_stock: i64,
    product_created_at: DateTime<Utc>,
}

impl From<SaleProductRow> for SaleWithProduct {
    fn from(row: SaleProductRow) -> Self {
        SaleWithProduct {
            sale: Sale {
                id: row.id,
                product_id: row.product_id,
                quantity: row.quantity,
                customer: row.customer,
                date: row.date,
                total: row.total,
            },
            product: Product {
                id: row.product_id,
                name: row.product_name,
                product_type: row.product_type,
                capacity: row.product_capacity,
                unit: row.product_unit,
                current_stock: row.product_current_stock,
                min_stock: row.product_min_stock,
                created_at: row.product_created_at,
            },
        }
    }
}

const SALE_WITH_PRODUCT_QUERY: &str = r#"
    SELECT s.id, s.product_id, s.quantity, s.customer, s.date, s.total,
           p.name AS product_name, p.product_type, p.capacity AS product_capacity,
           p.unit AS product_unit, p.current_stock AS product_current_stock,
           p.min_stock AS product_min_stock, p.created_at AS product_created_at
    FROM sales s
    JOIN products p ON p.id = s.product_id
"#;

impl SaleService {
    /// Create a new SaleService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Record a sale and decrement the product's stock
    pub async fn record(&self, input: RecordSaleInput) -> AppResult<Sale> {
        if input.quantity <= 0 {
            return Err(AppError::Validation(
                "Quantity must be positive".to_string(),
            ));
        }

        if parse_total(&input.total).is_none() {
            return Err(AppError::Validation(
                "Total must be a decimal amount".to_string(),
            ));
        }

        let mut tx = self.db.begin().await?;

        let current_stock = sqlx::query_scalar::<_, i64>(
            "SELECT current_stock FROM products WHERE id = $1 FOR UPDATE",
        )
        .bind(input.product_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

        // No floor: selling past the cached stock level leaves it negative
        sqlx::query("UPDATE products SET current_stock = $1 WHERE id = $2")
            .bind(current_stock - input.quantity)
            .bind(input.product_id)
            .execute(&mut *tx)
            .await?;

        let date = input.date.unwrap_or_else(Utc::now);

        let sale = sqlx::query_as::<_, Sale>(
            r#"
            INSERT INTO sales (product_id, quantity, customer, date, total)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, product_id, quantity, customer, date, total
            "#,
        )
        .bind(input.product_id)
        .bind(input.quantity)
        .bind(&input.customer)
        .bind(date)
        .bind(input.total.trim())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(sale)
    }

    /// List all sales in insertion order, resolved with products
    pub async fn list(&self) -> AppResult<Vec<SaleWithProduct>> {
        let rows = sqlx::query_as::<_, SaleProductRow>(&format!(
            "{SALE_WITH_PRODUCT_QUERY} ORDER BY s.date, s.id",
        ))
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// List the most recently dated sales, newest first
    pub async fn list_recent(&self, limit: i64) -> AppResult<Vec<SaleWithProduct>> {
        let rows = sqlx::query_as::<_, SaleProductRow>(&format!(
            "{SALE_WITH_PRODUCT_QUERY} ORDER BY s.date DESC, s.id LIMIT $1",
        ))
        .bind(limit)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
