//! Response DTOs for the todo API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::models::Todo;
use crate::query::Page;

/// Response body for GET /api/todos
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse {
    /// Records on the requested page
    pub items: Vec<Todo>,
    /// Number of pages for the filtered collection
    pub total_pages: usize,
}

impl From<Page> for PaginatedResponse {
    fn from(page: Page) -> Self {
        Self {
            items: page.items,
            total_pages: page.total_pages,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Reloads from the backing file
    pub loads: u64,
    /// Snapshots served without touching the file
    pub hits: u64,
    /// Successful rewrites of the backing file
    pub writes: u64,
    /// Updates that changed nothing and skipped the write
    pub skipped_writes: u64,
    /// Records in the current snapshot
    pub total_records: usize,
    /// Snapshot version, bumped on every reload or write
    pub version: u64,
    /// Hit rate (hits / (hits + loads))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            loads: stats.loads,
            hits: stats.hits,
            writes: stats.writes,
            skipped_writes: stats.skipped_writes,
            total_records: stats.total_records,
            version: stats.version,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
