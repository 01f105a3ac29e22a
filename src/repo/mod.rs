//! Content repository: fetching, loading, storing, filtering.

pub mod fetch;
pub mod filter;
pub mod loader;
pub mod store;
