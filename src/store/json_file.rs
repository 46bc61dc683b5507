//! JSON File Store
//!
//! Reads and atomically rewrites the backing JSON array.

use std::collections::HashSet;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{Result, TodoError};
use crate::models::Todo;
use crate::store::TodoStore;

// == JSON File Store ==
/// Backing file holding the whole collection as one JSON array.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    // == Constructor ==
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory the temporary file is created in, so the rename stays on one filesystem.
    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl TodoStore for JsonFileStore {
    // == Load ==
    fn load(&self) -> Result<Vec<Todo>> {
        let bytes = fs::read(&self.path).map_err(|e| TodoError::io(&self.path, e))?;
        let todos: Vec<Todo> = serde_json::from_slice(&bytes)
            .map_err(|e| TodoError::corrupt(&self.path, e.to_string()))?;

        let mut seen = HashSet::with_capacity(todos.len());
        if let Some(dup) = todos.iter().find(|todo| !seen.insert(todo.id.as_str())) {
            return Err(TodoError::corrupt(
                &self.path,
                format!("duplicate id '{}'", dup.id),
            ));
        }

        debug!(path = %self.path.display(), records = todos.len(), "Loaded todo file");
        Ok(todos)
    }

    // == Save ==
    /// Writes to a sibling temp file, fsyncs, then renames over the target.
    ///
    /// The temp file is deleted when dropped on any early return.
    fn save(&self, todos: &[Todo]) -> Result<()> {
        let dir = self.parent_dir();
        let tmp = NamedTempFile::new_in(dir).map_err(|e| TodoError::io(dir, e))?;

        let mut writer = BufWriter::new(tmp);
        serde_json::to_writer_pretty(&mut writer, todos)
            .map_err(|e| TodoError::Internal(format!("Failed to serialize todos: {}", e)))?;
        writer.flush().map_err(|e| TodoError::io(&self.path, e))?;

        let tmp = writer
            .into_inner()
            .map_err(|e| TodoError::io(&self.path, e.into_error()))?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| TodoError::io(&self.path, e))?;
        tmp.persist(&self.path)
            .map_err(|e| TodoError::io(&self.path, e.error))?;

        debug!(path = %self.path.display(), records = todos.len(), "Rewrote todo file");
        Ok(())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TodoStatus;
    use tempfile::TempDir;

    const TWO_TODOS: &str = r#"[
        {"id": "a", "title": "First", "content": "one", "type": "Wins", "status": "Active",
         "creationTime": "2023-01-01T00:00:00Z", "dueDate": "2023-01-02T00:00:00Z"},
        {"id": "b", "title": "Second", "content": "two", "status": "Done",
         "creationTime": "2023-01-03T00:00:00Z", "dueDate": "2023-01-04T00:00:00Z"}
    ]"#;

    fn store_with(contents: &str) -> (TempDir, JsonFileStore) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, contents).unwrap();
        (dir, JsonFileStore::new(path))
    }

    #[test]
    fn test_load_valid_file() {
        let (_dir, store) = store_with(TWO_TODOS);

        let todos = store.load().unwrap();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].id, "a");
        assert_eq!(todos[1].status, TodoStatus::Done);
        assert!(todos[1].kind.is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("missing.json"));

        assert!(matches!(store.load(), Err(TodoError::Io { .. })));
    }

    #[test]
    fn test_load_malformed_json() {
        let (_dir, store) = store_with(r#"[{"id": "a","#);
        assert!(matches!(store.load(), Err(TodoError::CorruptStore { .. })));
    }

    #[test]
    fn test_load_wrong_shape() {
        let (_dir, store) = store_with(r#"{"todos": []}"#);
        assert!(matches!(store.load(), Err(TodoError::CorruptStore { .. })));
    }

    #[test]
    fn test_load_duplicate_ids() {
        let dup = TWO_TODOS.replace(r#""id": "b""#, r#""id": "a""#);
        let (_dir, store) = store_with(&dup);

        match store.load() {
            Err(TodoError::CorruptStore { reason, .. }) => assert!(reason.contains("'a'")),
            other => panic!("expected corrupt store, got {:?}", other),
        }
    }

    #[test]
    fn test_load_empty_array() {
        let (_dir, store) = store_with("[]");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let (_dir, store) = store_with(TWO_TODOS);

        let original = store.load().unwrap();
        store.save(&original).unwrap();
        let reloaded = store.load().unwrap();

        assert_eq!(reloaded, original);
    }

    #[test]
    fn test_timestamps_survive_load_and_save_verbatim() {
        let raw = r#"[
            {"id": "a", "title": "Offset", "content": "", "status": "Active",
             "creationTime": "2023-05-01T09:30:00.000+02:00", "dueDate": "2023-05-10T17:00:00.000Z"},
            {"id": "b", "title": "Naive", "content": "", "status": "Active",
             "creationTime": "2023-05-01T09:30:00", "dueDate": "2023-05-10T17:00:00.1234567"}
        ]"#;
        let (_dir, store) = store_with(raw);

        let todos = store.load().unwrap();
        store.save(&todos).unwrap();

        let written: serde_json::Value =
            serde_json::from_slice(&fs::read(store.path()).unwrap()).unwrap();
        let expected: serde_json::Value = serde_json::from_str(raw).unwrap();
        assert_eq!(written, expected);
        assert_eq!(written[0]["creationTime"], "2023-05-01T09:30:00.000+02:00");
        assert_eq!(written[1]["creationTime"], "2023-05-01T09:30:00");

        // a second cycle is byte-identical
        let first = fs::read(store.path()).unwrap();
        store.save(&store.load().unwrap()).unwrap();
        assert_eq!(fs::read(store.path()).unwrap(), first);
    }

    #[test]
    fn test_load_invalid_timestamp() {
        let bad = TWO_TODOS.replace("2023-01-02T00:00:00Z", "next tuesday");
        let (_dir, store) = store_with(&bad);

        match store.load() {
            Err(TodoError::CorruptStore { reason, .. }) => assert!(reason.contains("next tuesday")),
            other => panic!("expected corrupt store, got {:?}", other),
        }
    }

    #[test]
    fn test_save_persists_changes() {
        let (_dir, store) = store_with(TWO_TODOS);

        let mut todos = store.load().unwrap();
        todos[0].set_status(TodoStatus::Done).unwrap();
        store.save(&todos).unwrap();

        let reloaded = store.load().unwrap();
        assert_eq!(reloaded[0].status, TodoStatus::Done);
        assert_eq!(reloaded[1], todos[1]);
    }

    #[test]
    fn test_save_leaves_no_temp_files() {
        let (dir, store) = store_with(TWO_TODOS);

        let todos = store.load().unwrap();
        store.save(&todos).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nope").join("data.json"));

        assert!(matches!(store.save(&[]), Err(TodoError::Io { .. })));
    }

    #[test]
    fn test_relative_path_uses_current_dir() {
        let store = JsonFileStore::new("data.json");
        assert_eq!(store.parent_dir(), Path::new("."));
    }
}
