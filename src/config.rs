//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::cache::DEFAULT_TTL_SECS;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON file holding the todo collection
    pub data_file: PathBuf,
    /// Maximum snapshot age in seconds before a reload from disk
    pub cache_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Page size used when a list request omits `pageSize`
    pub default_page_size: i64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DATA_FILE` - Backing JSON file (default: ./data.json)
    /// - `CACHE_TTL` - Snapshot TTL in seconds (default: 300)
    /// - `SERVER_PORT` - HTTP server port (default: 5001)
    /// - `DEFAULT_PAGE_SIZE` - Page size when none is requested (default: 5)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            data_file: env::var("DATA_FILE")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.data_file),
            cache_ttl: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_ttl),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            default_page_size: env::var("DEFAULT_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|size: &i64| *size > 0)
                .unwrap_or(defaults.default_page_size),
        }
    }

    /// Snapshot TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("./data.json"),
            cache_ttl: DEFAULT_TTL_SECS,
            server_port: 5001,
            default_page_size: 5,
        }
    }
}
