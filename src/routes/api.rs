//! JSON API routes, nested under `/api` by [`app`](super::app).

use crate::handlers::api::{
    create_customer, create_order, create_product, list_customer_orders, list_customers, list_orders,
    list_products,
};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/productos", get(list_products))
        .route("/producto", post(create_product))
        .route("/clientes", get(list_customers))
        .route("/clientes/:id/pedidos", get(list_customer_orders))
        .route("/cliente", post(create_customer))
        .route("/pedidos", get(list_orders))
        .route("/pedido", post(create_order))
        .with_state(state)
}
