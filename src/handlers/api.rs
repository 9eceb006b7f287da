//! JSON API: list and create for each resource. Responses are bare records, status 200.

use crate::error::AppError;
use crate::extractors::JsonFields;
use crate::model::{CustomerRecord, NewCustomer, NewOrder, NewProduct, OrderRecord, ProductRecord};
use crate::service::{CustomerService, OrderService, ProductService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<ProductRecord>>, AppError> {
    let rows = ProductService::list(&state.pool).await?;
    Ok(Json(rows.iter().map(|p| p.to_record()).collect()))
}

pub async fn create_product(
    State(state): State<AppState>,
    JsonFields(fields): JsonFields,
) -> Result<Json<ProductRecord>, AppError> {
    let input = NewProduct::from_fields(&fields)?;
    let row = ProductService::create(&state.pool, &input).await?;
    Ok(Json(row.to_record()))
}

pub async fn list_customers(State(state): State<AppState>) -> Result<Json<Vec<CustomerRecord>>, AppError> {
    let rows = CustomerService::list(&state.pool).await?;
    Ok(Json(rows.iter().map(|c| c.to_record()).collect()))
}

pub async fn create_customer(
    State(state): State<AppState>,
    JsonFields(fields): JsonFields,
) -> Result<Json<CustomerRecord>, AppError> {
    let input = NewCustomer::from_fields(&fields)?;
    let row = CustomerService::create(&state.pool, &input).await?;
    Ok(Json(row.to_record()))
}

pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<OrderRecord>>, AppError> {
    let rows = OrderService::list(&state.pool).await?;
    Ok(Json(rows.iter().map(|o| o.to_record()).collect()))
}

pub async fn create_order(
    State(state): State<AppState>,
    JsonFields(fields): JsonFields,
) -> Result<Json<OrderRecord>, AppError> {
    let input = NewOrder::from_fields(&fields)?;
    let row = OrderService::create(&state.pool, &input).await?;
    Ok(Json(row.to_record()))
}

/// Orders owned by one customer; 404 when the customer does not exist.
pub async fn list_customer_orders(
    State(state): State<AppState>,
    Path(customer_id): Path<i32>,
) -> Result<Json<Vec<OrderRecord>>, AppError> {
    CustomerService::get(&state.pool, customer_id)
        .await?
        .ok_or(AppError::NotFound {
            resource: "cliente",
            id: customer_id,
        })?;
    let rows = OrderService::list_for_customer(&state.pool, customer_id).await?;
    Ok(Json(rows.iter().map(|o| o.to_record()).collect()))
}
