//! Request extractors that decode bodies into [`Fields`](crate::input::Fields).

mod fields;
pub use fields::{FormFields, JsonFields};
