//! Shared utilities.

mod hash;

pub use hash::{normalize_query, query_seed};
