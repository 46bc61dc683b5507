//! Shared fixtures for unit tests.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tempfile::TempDir;

use crate::error::{Result, TodoError};
use crate::models::{Todo, TodoStatus};
use crate::store::{JsonFileStore, TodoStore};

fn todo(n: u32, kind: Option<&str>, title: &str, content: &str) -> Todo {
    Todo {
        id: format!("todo-{}", n),
        title: title.to_string(),
        content: content.to_string(),
        kind: kind.map(str::to_string),
        status: TodoStatus::Active,
        creation_time: format!("2023-05-0{}T09:00:00Z", n).parse().unwrap(),
        due_date: format!("2023-06-0{}T17:00:00Z", n).parse().unwrap(),
    }
}

/// Seven active records: three "Wins", one mentioning a refund.
pub fn sample_todos() -> Vec<Todo> {
    vec![
        todo(1, Some("Wins"), "Close deal", "Signed the contract"),
        todo(2, Some("Results"), "Q1 numbers", "Revenue up"),
        todo(3, Some("Wins"), "New hire", "Offer accepted"),
        todo(4, Some("Withdraw"), "Cancel order", "Customer called. Refund issued today."),
        todo(5, None, "Misc", "Nothing to add"),
        todo(6, Some("Wins"), "Award", "Team of the year"),
        todo(7, Some(""), "Cleanup", "Archive old tickets"),
    ]
}

/// Writes `todos` to `data.json` in a fresh temp dir.
pub fn data_file(todos: &[Todo]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, serde_json::to_vec_pretty(todos).unwrap()).unwrap();
    (dir, path)
}

/// File store that counts calls and can slow loads and saves down.
pub struct CountingStore {
    inner: JsonFileStore,
    load_delay: Duration,
    save_delay: Duration,
    pub loads: AtomicUsize,
    pub saves: AtomicUsize,
}

impl CountingStore {
    pub fn new(path: PathBuf) -> Self {
        Self::with_load_delay(path, Duration::ZERO)
    }

    pub fn with_load_delay(path: PathBuf, load_delay: Duration) -> Self {
        Self::with_delays(path, load_delay, Duration::ZERO)
    }

    pub fn with_delays(path: PathBuf, load_delay: Duration, save_delay: Duration) -> Self {
        Self {
            inner: JsonFileStore::new(path),
            load_delay,
            save_delay,
            loads: AtomicUsize::new(0),
            saves: AtomicUsize::new(0),
        }
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl TodoStore for CountingStore {
    fn load(&self) -> Result<Vec<Todo>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        std::thread::sleep(self.load_delay);
        self.inner.load()
    }

    fn save(&self, todos: &[Todo]) -> Result<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        std::thread::sleep(self.save_delay);
        self.inner.save(todos)
    }
}

/// File store whose writes always fail.
pub struct ReadOnlyStore {
    inner: JsonFileStore,
}

impl ReadOnlyStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            inner: JsonFileStore::new(path),
        }
    }
}

impl TodoStore for ReadOnlyStore {
    fn load(&self) -> Result<Vec<Todo>> {
        self.inner.load()
    }

    fn save(&self, _todos: &[Todo]) -> Result<()> {
        Err(TodoError::io(
            self.inner.path(),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only store"),
        ))
    }
}
