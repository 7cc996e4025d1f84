//! Stock ledger service
//!
//! Every stock mutation enters through here as an immutable ledger entry.
//! An entry and its stock adjustment are applied atomically: the product
//! row is locked for the duration of the transaction, so concurrent
//! movements against the same product serialize instead of racing. A
//! movement referencing an unknown product is rejected outright and writes
//! nothing.
//!
//! Stock is not clamped at zero; outbound movements may drive it negative.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::DeliveryType;
use crate::services::product::Product;

/// Stock ledger service
#[derive(Clone)]
pub struct DeliveryService {
    db: PgPool,
}

/// An immutable ledger entry with its stock snapshots
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Delivery {
    pub id: Uuid,
    pub product_id: Uuid,
    pub delivery_type: String,
    pub quantity: i64,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub previous_stock: i64,
    pub current_stock: i64,
}

/// A ledger entry resolved with its product
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryWithProduct {
    #[serde(flatten)]
    pub delivery: Delivery,
    pub product: Product,
}

/// Input for recording a stock movement
#[derive(Debug, Deserialize)]
pub struct RecordDeliveryInput {
    pub product_id: Uuid,
    pub delivery_type: DeliveryType,
    pub quantity: i64,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

/// Row for ledger queries joined with the product
#[derive(Debug, sqlx::FromRow)]
struct DeliveryProductRow {
    id: Uuid,
    product_id: Uuid,
    delivery_type: String,
    quantity: i64,
    description: Option<String>,
    date: DateTime<Utc>,
    previous_stock: i64,
    current_stock: i64,
    product_name: String,
    product_type: String,
    product_capacity: Option<String>,
    product_unit: String,
    product_current_stock: i64,
    product_min_stock: i64,
    product_created_at: DateTime<Utc>,
}

impl From<DeliveryProductRow> for DeliveryWithProduct {
    fn from(row: DeliveryProductRow) -> Self {
        DeliveryWithProduct {
            delivery: Delivery {
                id: row.id,
                product_id: row.product_id,
                delivery_type: row.delivery_type,
                quantity: row.quantity,
                description: row.description,
                date: row.date,
                previous_stock: row.previous_stock,
                current_stock: row.current_stock,
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

const DELIVERY_WITH_PRODUCT_QUERY: &str = r#"
    SELECT d.id, d.product_id, d.delivery_type, d.quantity, d.description, d.date,
           d.previous_stock, d.current_stock,
           p.name AS product_name, p.product_type, p.capacity AS product_capacity,
           p.unit AS product_unit, p.current_stock AS product_current_stock,
           p.min_stock AS product_min_stock, p.created_at AS product_created_at
    FROM deliveries d
    JOIN products p ON p.id = d.product_id
"#;

impl DeliveryService {
    /// Create a new DeliveryService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Record a stock movement and adjust the product's stock
    pub async fn record(&self, input: RecordDeliveryInput) -> AppResult<Delivery> {
        if input.quantity <= 0 {
            return Err(AppError::Validation(
                "Quantity must be positive".to_string(),
            ));
        }

        let mut tx = self.db.begin().await?;

        // Lock the product row; concurrent movements against the same
        // product wait here
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, product_type, capacity, unit, current_stock, min_stock, created_at
            FROM products
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(input.product_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

        let previous_stock = product.current_stock;
        let current_stock = previous_stock + input.delivery_type.signed_delta(input.quantity);

        sqlx::query("UPDATE products SET current_stock = $1 WHERE id = $2")
            .bind(current_stock)
            .bind(product.id)
            .execute(&mut *tx)
            .await?;

        let date = input.date.unwrap_or_else(Utc::now);

        let delivery = sqlx::query_as::<_, Delivery>(
            r#"
            INSERT INTO deliveries (product_id, delivery_type, quantity, description, date,
                                    previous_stock, current_stock)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, product_id, delivery_type, quantity, description, date,
                      previous_stock, current_stock
            "#,
        )
        .bind(input.product_id)
        .bind(input.delivery_type.as_str())
        .bind(input.quantity)
        .bind(&input.description)
        .bind(date)
        .bind(previous_stock)
        .bind(current_stock)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(delivery)
    }

    /// List the full ledger in insertion order, resolved with products
    pub async fn list(&self) -> AppResult<Vec<DeliveryWithProduct>> {
        let rows = sqlx::query_as::<_, DeliveryProductRow>(&format!(
            "{DELIVERY_WITH_PRODUCT_QUERY} ORDER BY d.date, d.id",
        ))
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// List the most recent ledger entries, newest first
    pub async fn list_recent(&self, limit: i64) -> AppResult<Vec<DeliveryWithProduct>> {
        let rows = sqlx::query_as::<_, DeliveryProductRow>(&format!(
            "{DELIVERY_WITH_PRODUCT_QUERY} ORDER BY d.date DESC, d.id LIMIT $1",
        ))
        .bind(limit)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
