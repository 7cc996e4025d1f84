//! Product catalog service
//!
//! `current_stock` here is a cache of the net ledger effect. Setting it
//! directly through `update` bypasses the ledger; that path is kept as an
//! administrative escape hatch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::ProductType;

/// Product catalog service
#[derive(Clone)]
pub struct ProductService {
    db: PgPool,
}

/// A trackable item with its stock levels
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub product_type: String,
    pub capacity: Option<String>,
    pub unit: String,
    pub current_stock: i64,
    pub min_stock: i64,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a product
#[derive(Debug, Deserialize)]
pub struct CreateProductInput {
    pub name: String,
    pub product_type: ProductType,
    pub capacity: Option<String>,
    pub unit: String,
    pub current_stock: Option<i64>,
    pub min_stock: Option<i64>,
}

/// Input for updating a product (partial)
#[derive(Debug, Deserialize)]
pub struct UpdateProductInput {
    pub name: Option<String>,
    pub product_type: Option<ProductType>,
    pub capacity: Option<String>,
    pub unit: Option<String>,
    pub current_stock: Option<i64>,
    pub min_stock: Option<i64>,
}

impl ProductService {
    /// Create a new ProductService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Create a product
    pub async fn create(&self, input: CreateProductInput) -> AppResult<Product> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, product_type, capacity, unit, current_stock, min_stock)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, product_type, capacity, unit, current_stock, min_stock, created_at
            "#,
        )
        .bind(&input.name)
        .bind(input.product_type.as_str())
        .bind(&input.capacity)
        .bind(&input.unit)
        .bind(input.current_stock.unwrap_or(0))
        .bind(input.min_stock.unwrap_or(0))
        .fetch_one(&self.db)
        .await?;

        Ok(product)
    }

    /// List all products in insertion order
    pub async fn list(&self) -> AppResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, product_type, capacity, unit, current_stock, min_stock, created_at
            FROM products
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(products)
    }

    /// Update a product with partial fields
    pub async fn update(&self, id: Uuid, input: UpdateProductInput) -> AppResult<Product> {
        let existing = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, product_type, capacity, unit, current_stock, min_stock, created_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

        let name = input.name.unwrap_or(existing.name);
        let product_type = input
            .product_type
            .map(|t| t.as_str().to_string())
            .unwrap_or(existing.product_type);
        let capacity = input.capacity.or(existing.capacity);
        let unit = input.unit.unwrap_or(existing.unit);
        let current_stock = input.current_stock.unwrap_or(existing.current_stock);
        let min_stock = input.min_stock.unwrap_or(existing.min_stock);

        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = $1, product_type = $2, capacity = $3, unit = $4,
                current_stock = $5, min_stock = $6
            WHERE id = $7
            RETURNING id, name, product_type, capacity, unit, current_stock, min_stock, created_at
            "#,
        )
        .bind(&name)
        .bind(&product_type)
        .bind(&capacity)
        .bind(&unit)
        .bind(current_stock)
        .bind(min_stock)
        .bind(id)
        .fetch_one(&self.db)
        .await?;

        Ok(product)
    }

    /// Delete a product
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Product".to_string()));
        }

        Ok(())
    }
}
