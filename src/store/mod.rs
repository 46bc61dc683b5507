//! Store Module
//!
//! Sole boundary between memory and the backing file.

mod json_file;

pub use json_file::JsonFileStore;

use crate::error::Result;
use crate::models::Todo;

// == Todo Store ==
/// Whole-collection persistence.
///
/// Implementations are blocking; the cache calls them from tokio's blocking pool.
pub trait TodoStore: Send + Sync + 'static {
    /// Reads the full collection.
    fn load(&self) -> Result<Vec<Todo>>;

    /// Replaces the full collection. Readers never observe a partial write.
    fn save(&self, todos: &[Todo]) -> Result<()>;
}
