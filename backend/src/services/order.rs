//! Production order tracking service
//!
//! Orders follow an explicit state machine: pending -> in_production ->
//! completed, with cancellation allowed from pending or in_production.
//! Produced amounts are recorded against in_production orders, clamp at the
//! target quantity, and complete the order when the target is reached.
//! Transition checks run under a row lock so concurrent updates serialize.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{apply_production, OrderStatus};
use crate::services::product::Product;

/// Production order service
#[derive(Clone)]
pub struct OrderService {
    db: PgPool,
}

/// A tracked unit of production demand
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Order {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: i64,
    pub produced: i64,
    pub status: String,
    pub due_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// An order resolved with its product
#[derive(Debug, Clone, Serialize)]
pub struct OrderWithProduct {
    #[serde(flatten)]
    pub order: Order,
    pub product: Product,
}

/// Input for creating a production order
#[derive(Debug, Deserialize)]
pub struct CreateOrderInput {
    pub product_id: Uuid,
    pub quantity: i64,
    pub due_date: DateTime<Utc>,
}

/// Input for recording produced amounts
#[derive(Debug, Deserialize)]
pub struct RecordProductionInput {
    pub amount: i64,
}

/// Row for order queries joined with the product
#[derive(Debug, sqlx::FromRow)]
struct OrderProductRow {
    id: Uuid,
    product_id: Uuid,
    quantity: i64,
    produced: i64,
    status: String,
    due_date: DateTime<Utc>,
    created_at: DateTime<Utc>,
    product_name: String,
    product_type: String,
    product_capacity: Option<String>,
    product_unit: String,
    product_current_stock: i64,
    product_min_stock: i64,
    product_created_at: DateTime<Utc>,
}

impl From<OrderProductRow> for OrderWithProduct {
    fn from(row: OrderProductRow) -> Self {
        OrderWithProduct {
            order: Order {
                id: row.id,
                product_id: row.product_id,
                quantity: row.quantity,
                produced: row.produced,
                status: row.status,
                due_date: row.due_date,
                created_at: row.created_at,
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

impl OrderService {
    /// Create a new OrderService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Create a production order in the pending state
    pub async fn create(&self, input: CreateOrderInput) -> AppResult<Order> {
        if input.quantity <= 0 {
            return Err(AppError::Validation(
                "Quantity must be positive".to_string(),
            ));
        }

        let product_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
                .bind(input.product_id)
                .fetch_one(&self.db)
                .await?;

        if !product_exists {
            return Err(AppError::NotFound("Product".to_string()));
        }

        let order = sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders (product_id, quantity, due_date)
            VALUES ($1, $2, $3)
            RETURNING id, product_id, quantity, produced, status, due_date, created_at
            "#,
        )
        .bind(input.product_id)
        .bind(input.quantity)
        .bind(input.due_date)
        .fetch_one(&self.db)
        .await?;

        Ok(order)
    }

    /// List all orders in insertion order, resolved with products
    pub async fn list(&self) -> AppResult<Vec<OrderWithProduct>> {
        let rows = sqlx::query_as::<_, OrderProductRow>(
            r#"
            SELECT o.id, o.product_id, o.quantity, o.produced, o.status, o.due_date, o.created_at,
                   p.name AS product_name, p.product_type, p.capacity AS product_capacity,
                   p.unit AS product_unit, p.current_stock AS product_current_stock,
                   p.min_stock AS product_min_stock, p.created_at AS product_created_at
            FROM orders o
            JOIN products p ON p.id = o.product_id
            ORDER BY o.created_at, o.id
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Move a pending order into production
    pub async fn advance(&self, id: Uuid) -> AppResult<Order> {
        let mut tx = self.db.begin().await?;

        let (order, status) = Self::lock_order(&mut tx, id).await?;

        if !status.can_advance() {
            return Err(AppError::InvalidTransition(format!(
                "Cannot start production on a {} order",
                order.status
            )));
        }

        let order = Self::update_order(&mut tx, id, order.produced, OrderStatus::InProduction).await?;

        tx.commit().await?;

        Ok(order)
    }

    /// Cancel a pending or in-production order
    pub async fn cancel(&self, id: Uuid) -> AppResult<Order> {
        let mut tx = self.db.begin().await?;

        let (order, status) = Self::lock_order(&mut tx, id).await?;

        if !status.can_cancel() {
            return Err(AppError::InvalidTransition(format!(
                "Cannot cancel a {} order",
                order.status
            )));
        }

        let order = Self::update_order(&mut tx, id, order.produced, OrderStatus::Cancelled).await?;

        tx.commit().await?;

        Ok(order)
    }

    /// Record a produced amount against an in-production order
    ///
    /// Clamps at the order target and completes the order once the target
    /// is reached.
    pub async fn record_production(&self, id: Uuid, amount: i64) -> AppResult<Order> {
        if amount <= 0 {
            return Err(AppError::Validation("Amount must be positive".to_string()));
        }

        let mut tx = self.db.begin().await?;

        let (order, status) = Self::lock_order(&mut tx, id).await?;

        if !status.accepts_production() {
            return Err(AppError::InvalidTransition(format!(
                "Cannot record production on a {} order",
                order.status
            )));
        }

        let (produced, new_status) = apply_production(order.produced, order.quantity, amount);

        let order = Self::update_order(&mut tx, id, produced, new_status).await?;

        tx.commit().await?;

        Ok(order)
    }

    /// Fetch an order under a row lock and decode its status
    async fn lock_order(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        id: Uuid,
    ) -> AppResult<(Order, OrderStatus)> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, product_id, quantity, produced, status, due_date, created_at
            FROM orders
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id)
        .fetch_optional(&mut **tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Order".to_string()))?;

        let status = OrderStatus::parse(&order.status).ok_or_else(|| {
            AppError::Internal(format!("Unrecognized order status: {}", order.status))
        })?;

        Ok((order, status))
    }

    /// Persist a produced amount and status for an order
    async fn update_order(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        id: Uuid,
        produced: i64,
        status: OrderStatus,
    ) -> AppResult<Order> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            UPDATE orders
            SET produced = $1, status = $2
            WHERE id = $3
            RETURNING id, product_id, quantity, produced, status, due_date, created_at
            "#,
        )
        .bind(produced)
        .bind(status.as_str())
        .bind(id)
        .fetch_one(&mut **tx)
        .await?;

        Ok(order)
    }
}
