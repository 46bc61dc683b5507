//! Todo Cache Module
//!
//! Shared snapshot of the collection with TTL reloads and serialized writes.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::cache::{CacheCounters, CacheStats, Snapshot};
use crate::error::{Result, TodoError};
use crate::models::{Todo, TodoStatus};
use crate::store::TodoStore;

// == Todo Cache ==
/// Owns the current snapshot and the store it is loaded from.
///
/// # Locking
/// - Readers clone the current `Arc<Snapshot>` under the read lock and release
///   it immediately, so queries run against a stable snapshot.
/// - Reloads and mutations hold the write lock for the whole
///   check/load or find/update/persist sequence and publish a new snapshot
///   only after it is durable. Concurrent callers waiting on a reload re-check
///   freshness once they get the lock and reuse its result.
pub struct TodoCache {
    store: Arc<dyn TodoStore>,
    ttl: Duration,
    current: RwLock<Option<Arc<Snapshot>>>,
    counters: CacheCounters,
}

impl TodoCache {
    // == Constructor ==
    /// Creates an empty cache; the first `snapshot` call loads from `store`.
    pub fn new(store: Arc<dyn TodoStore>, ttl: Duration) -> Self {
        Self {
            store,
            ttl,
            current: RwLock::new(None),
            counters: CacheCounters::default(),
        }
    }

    // == Snapshot ==
    /// Returns the current collection, reloading it first if it is missing or stale.
    ///
    /// Load failures are returned as errors; a stale snapshot is never served
    /// in their place.
    pub async fn snapshot(&self) -> Result<Arc<Snapshot>> {
        {
            let current = self.current.read().await;
            if let Some(snapshot) = self.fresh(&current) {
                self.counters.record_hit();
                return Ok(snapshot);
            }
        }

        let mut current = self.current.write().await;
        self.ensure_fresh(&mut current).await
    }

    // == Mutate ==
    /// Applies `updater` to the record with `id` and persists the whole collection.
    ///
    /// Returns `NotFound` without writing for an unknown id. If `updater` fails
    /// or the write fails, the published snapshot is left as it was. An update
    /// that changes nothing succeeds without rewriting the file.
    ///
    /// The critical section runs on its own task, so a caller that is dropped
    /// mid-write (e.g. a disconnected client) cannot leave a durable write
    /// unpublished.
    pub async fn mutate<F>(self: &Arc<Self>, id: &str, updater: F) -> Result<Todo>
    where
        F: FnOnce(&mut Todo) -> Result<()> + Send + 'static,
    {
        let cache = Arc::clone(self);
        let id = id.to_string();
        tokio::spawn(async move { cache.mutate_exclusive(&id, updater).await })
            .await
            .map_err(|e| TodoError::Internal(format!("update task failed: {}", e)))?
    }

    /// Find, update, persist and publish under the write lock.
    async fn mutate_exclusive<F>(&self, id: &str, updater: F) -> Result<Todo>
    where
        F: FnOnce(&mut Todo) -> Result<()>,
    {
        let mut current = self.current.write().await;
        let snapshot = self.ensure_fresh(&mut current).await?;

        let original = snapshot
            .get(id)
            .ok_or_else(|| TodoError::NotFound(id.to_string()))?;
        let mut updated = original.clone();
        updater(&mut updated)?;

        if updated.id != original.id {
            return Err(TodoError::InvalidParameter(
                "a todo id cannot be changed".to_string(),
            ));
        }
        if &updated == original {
            self.counters.record_skipped_write();
            debug!(id, "Update left todo unchanged, skipping write");
            return Ok(updated);
        }

        let todos = snapshot
            .with_replaced(&updated)
            .ok_or_else(|| TodoError::NotFound(id.to_string()))?;
        let todos = self.persist(todos).await?;

        let version = snapshot.version() + 1;
        *current = Some(Arc::new(Snapshot::new(version, todos)));
        self.counters.record_write();
        info!(id, version, "Persisted todo update");

        Ok(updated)
    }

    // == Update Status ==
    /// Moves a record to `status`, refusing to reactivate a `Done` record.
    pub async fn update_status(self: &Arc<Self>, id: &str, status: TodoStatus) -> Result<Todo> {
        self.mutate(id, move |todo| todo.set_status(status))
            .await
            .inspect_err(|e| {
                if matches!(e, TodoError::InvalidParameter(_)) {
                    warn!(id, ?status, "Refused status change: {}", e);
                }
            })
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        let current = self.current.read().await;
        let (records, version) = current
            .as_ref()
            .map_or((0, 0), |s| (s.todos().len(), s.version()));
        self.counters.read(records, version)
    }

    // == Internals ==
    fn fresh(&self, current: &Option<Arc<Snapshot>>) -> Option<Arc<Snapshot>> {
        current
            .as_ref()
            .filter(|snapshot| !snapshot.is_stale(self.ttl))
            .map(Arc::clone)
    }

    /// Must be called with the write lock held.
    async fn ensure_fresh(&self, current: &mut Option<Arc<Snapshot>>) -> Result<Arc<Snapshot>> {
        if let Some(snapshot) = self.fresh(current) {
            self.counters.record_hit();
            return Ok(snapshot);
        }

        let todos = self.load().await?;
        let version = current.as_ref().map_or(1, |s| s.version() + 1);
        let snapshot = Arc::new(Snapshot::new(version, todos));
        *current = Some(Arc::clone(&snapshot));
        self.counters.record_load();
        info!(
            version,
            records = snapshot.todos().len(),
            "Reloaded todo snapshot"
        );

        Ok(snapshot)
    }

    async fn load(&self) -> Result<Vec<Todo>> {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || store.load())
            .await
            .map_err(|e| TodoError::Internal(format!("load task failed: {}", e)))?
    }

    /// Saves `todos` and hands them back for publishing.
    async fn persist(&self, todos: Vec<Todo>) -> Result<Vec<Todo>> {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || store.save(&todos).map(|()| todos))
            .await
            .map_err(|e| TodoError::Internal(format!("save task failed: {}", e)))?
    }
}
