//! Todo Server - A small todo service backed by a JSON file
//!
//! Serves filtered, searched and paginated reads from a TTL snapshot cache and
//! writes status updates back to the file atomically.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod store;

#[cfg(test)]
mod test_support;

pub use api::AppState;
pub use cache::TodoCache;
pub use config::Config;
pub use error::{Result, TodoError};
