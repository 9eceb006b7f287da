//! Per-entity persistence operations over a `PgPool`. Writes run in one transaction each.

mod customers;
mod orders;
mod products;
pub use customers::CustomerService;
pub use orders::OrderService;
pub use products::ProductService;
