//! HTML admin pages: list views, create forms, delete actions. Writes answer with `303 See Other`.

use crate::extractors::FormFields;
use crate::model::{NewCustomer, NewOrder, NewProduct};
use crate::service::{CustomerService, OrderService, ProductService};
use crate::state::AppState;
use crate::views::{self, HtmlError};
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
};

pub async fn index() -> Html<String> {
    Html(views::index_page())
}

pub async fn products(State(state): State<AppState>) -> Result<Html<String>, HtmlError> {
    let rows = ProductService::list(&state.pool).await?;
    Ok(Html(views::products_page(&rows)))
}

pub async fn customers(State(state): State<AppState>) -> Result<Html<String>, HtmlError> {
    let rows = CustomerService::list(&state.pool).await?;
    Ok(Html(views::customers_page(&rows)))
}

pub async fn orders(State(state): State<AppState>) -> Result<Html<String>, HtmlError> {
    let rows = OrderService::list(&state.pool).await?;
    Ok(Html(views::orders_page(&rows)))
}

pub async fn overview(State(state): State<AppState>) -> Result<Html<String>, HtmlError> {
    let products = ProductService::list(&state.pool).await?;
    let customers = CustomerService::list(&state.pool).await?;
    let orders = OrderService::list(&state.pool).await?;
    Ok(Html(views::overview_page(&products, &customers, &orders)))
}

pub async fn product_form() -> Html<String> {
    Html(views::product_form_page())
}

pub async fn submit_product(
    State(state): State<AppState>,
    FormFields(fields): FormFields,
) -> Result<Redirect, HtmlError> {
    let input = NewProduct::from_fields(&fields)?;
    ProductService::create(&state.pool, &input).await?;
    Ok(Redirect::to("/productos"))
}

pub async fn customer_form() -> Html<String> {
    Html(views::customer_form_page())
}

pub async fn submit_customer(
    State(state): State<AppState>,
    FormFields(fields): FormFields,
) -> Result<Redirect, HtmlError> {
    let input = NewCustomer::from_fields(&fields)?;
    CustomerService::create(&state.pool, &input).await?;
    Ok(Redirect::to("/clientes"))
}

pub async fn order_form(State(state): State<AppState>) -> Result<Html<String>, HtmlError> {
    let customers = CustomerService::list(&state.pool).await?;
    Ok(Html(views::order_form_page(&customers)))
}

pub async fn submit_order(
    State(state): State<AppState>,
    FormFields(fields): FormFields,
) -> Result<Redirect, HtmlError> {
    let input = NewOrder::from_fields(&fields)?;
    OrderService::create(&state.pool, &input).await?;
    Ok(Redirect::to("/pedidos"))
}

pub async fn delete_product(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Redirect, HtmlError> {
    ProductService::delete(&state.pool, id).await?;
    Ok(Redirect::to("/productos"))
}

pub async fn delete_customer(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Redirect, HtmlError> {
    CustomerService::delete(&state.pool, id).await?;
    Ok(Redirect::to("/clientes"))
}

pub async fn delete_order(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Redirect, HtmlError> {
    OrderService::delete(&state.pool, id).await?;
    Ok(Redirect::to("/pedidos"))
}
