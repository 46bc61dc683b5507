//! Cache Module
//!
//! Holds the shared, versioned snapshot of the todo collection with TTL
//! reloads and serialized write-back.

mod manager;
mod snapshot;
mod stats;

// Re-export public types
pub use manager::TodoCache;
pub use snapshot::Snapshot;
pub use stats::CacheStats;

pub(crate) use stats::CacheCounters;

// == Public Constants ==
/// Default snapshot TTL in seconds
pub const DEFAULT_TTL_SECS: u64 = 300;
