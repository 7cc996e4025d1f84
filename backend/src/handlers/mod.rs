//! HTTP handlers for the Cleanstock backend

pub mod auth;
pub mod dashboard;
pub mod delivery;
pub mod health;
pub mod order;
pub mod product;
pub mod sale;

pub use auth::{login, register};
pub use dashboard::get_dashboard;
pub use delivery::{list_deliveries, record_delivery};
pub use health::health_check;
pub use order::{advance_order, cancel_order, create_order, list_orders, record_production};
pub use product::{create_product, delete_product, list_products, update_product};
pub use sale::{list_sales, record_sale};
