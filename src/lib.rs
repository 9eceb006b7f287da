//! Tienda admin: products, customers and orders over a JSON API and HTML admin pages, stored in PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod input;
pub mod migration;
pub mod model;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod views;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use input::Fields;
pub use migration::apply_migrations;
pub use routes::{api_routes, app, common_routes, common_routes_with_ready, page_routes};
pub use service::{CustomerService, OrderService, ProductService};
pub use state::AppState;
pub use store::{connect, ensure_database_exists};
