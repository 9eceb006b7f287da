//! Stored records and their serialized views.
//!
//! Each entity has a row type read with `sqlx::FromRow`, an input type decoded from
//! request [`Fields`](crate::input::Fields), and an explicit `to_record` mapping into
//! the shape the JSON API returns.

mod customer;
mod order;
mod product;
pub use customer::*;
pub use order::*;
pub use product::*;
