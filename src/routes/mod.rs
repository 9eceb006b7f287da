//! Routers for each surface and the assembled application.

mod api;
mod common;
mod pages;
pub use api::api_routes;
pub use common::{common_routes, common_routes_with_ready};
pub use pages::page_routes;

use crate::config::Settings;
use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Both surfaces plus health routes: HTML at the root, JSON under `/api`.
pub fn app(state: AppState, settings: &Settings) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(page_routes(state.clone()))
        .nest("/api", api_routes(state))
        .layer(RequestBodyLimitLayer::new(settings.body_limit_bytes))
        .layer(TraceLayer::new_for_http())
}
