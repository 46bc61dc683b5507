//! Snapshot Module
//!
//! An immutable, versioned copy of the whole collection.

use std::time::{Duration, Instant};

use crate::models::Todo;

// == Snapshot ==
/// The collection as of one load or write.
///
/// Snapshots are shared behind `Arc` and never mutated; writers publish a new one.
#[derive(Debug)]
pub struct Snapshot {
    version: u64,
    loaded_at: Instant,
    todos: Vec<Todo>,
}

impl Snapshot {
    pub(crate) fn new(version: u64, todos: Vec<Todo>) -> Self {
        Self {
            version,
            loaded_at: Instant::now(),
            todos,
        }
    }

    /// Records in backing-file order.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Monotonic version, bumped on every reload and write.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Time since this snapshot was loaded or written.
    pub fn age(&self) -> Duration {
        self.loaded_at.elapsed()
    }

    /// True once the age exceeds `ttl`.
    pub fn is_stale(&self, ttl: Duration) -> bool {
        self.age() > ttl
    }

    /// Looks a record up by id.
    pub fn get(&self, id: &str) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.todos.iter().position(|todo| todo.id == id)
    }

    /// Copy of the collection with `updated` in place of the record at the same id.
    pub(crate) fn with_replaced(&self, updated: &Todo) -> Option<Vec<Todo>> {
        let index = self.position(&updated.id)?;
        let mut todos = self.todos.clone();
        todos[index] = updated.clone();
        Some(todos)
    }
}
