//! Route definitions for the Cleanstock backend

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Auth routes (public)
        .nest("/auth", auth_routes())
        // Protected routes - product catalog
        .nest("/products", product_routes(state.clone()))
        // Protected routes - stock ledger
        .nest("/deliveries", delivery_routes(state.clone()))
        // Protected routes - production orders
        .nest("/orders", order_routes(state.clone()))
        // Protected routes - sales register
        .nest("/sales", sale_routes(state.clone()))
        // Protected routes - dashboard rollup
        .nest("/dashboard", dashboard_routes(state))
}

/// Authentication routes (public)
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
}

/// Product catalog routes (protected)
fn product_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/:product_id",
            put(handlers::update_product).delete(handlers::delete_product),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Stock ledger routes (protected)
fn delivery_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_deliveries).post(handlers::record_delivery),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Production order routes (protected)
fn order_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_orders).post(handlers::create_order))
        .route("/:order_id/advance", post(handlers::advance_order))
        .route("/:order_id/cancel", post(handlers::cancel_order))
        .route("/:order_id/production", post(handlers::record_production))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Sales register routes (protected)
fn sale_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_sales).post(handlers::record_sale))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Dashboard routes (protected)
fn dashboard_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_dashboard))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
