//! HTML admin routes at the root.

use crate::handlers::pages::{
    customer_form, customers, delete_customer, delete_order, delete_product, index, order_form, orders, overview,
    product_form, products, submit_customer, submit_order, submit_product,
};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn page_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/productos", get(products))
        .route("/clientes", get(customers))
        .route("/pedidos", get(orders))
        .route("/listado_general", get(overview))
        .route("/formulario_producto", get(product_form).post(submit_product))
        .route("/formulario_cliente", get(customer_form).post(submit_customer))
        .route("/formulario_pedido", get(order_form).post(submit_order))
        .route("/producto/delete/:id", post(delete_product))
        .route("/cliente/delete/:id", post(delete_customer))
        .route("/pedido/delete/:id", post(delete_order))
        .with_state(state)
}
