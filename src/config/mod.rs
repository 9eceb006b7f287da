//! Runtime settings: database, listener and request limits.

mod loader;
mod types;
pub use types::*;
