//! Business logic services for the Cleanstock backend

pub mod auth;
pub mod dashboard;
pub mod delivery;
pub mod order;
pub mod product;
pub mod sale;

pub use auth::AuthService;
pub use dashboard::DashboardService;
pub use delivery::DeliveryService;
pub use order::OrderService;
pub use product::ProductService;
pub use sale::SaleService;
