//! Persistence for the board collections.
//!
//! The durable store is a string key-value blob store: key `todos` holds the
//! JSON-serialized flat task sequence, key `tags` the tag registry. An absent
//! key loads as an empty collection; malformed JSON is fatal for that
//! collection and surfaces as [`StorageError::Parse`].

use super::types::{BoardData, Task};
use crate::shared::errors::StorageError;
use crate::shared::paths::{ensure_dir, get_board_dir};
use std::collections::HashMap;
use std::path::PathBuf;

pub const TODOS_KEY: &str = "todos";
pub const TAGS_KEY: &str = "tags";

/// String-keyed blob store the board writes through to.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// File-backed store: one pretty-printed JSON file per key (`{key}.json`)
/// under a data directory, created on first write.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at the default board directory under the XDG data dir.
    pub fn open_default() -> Self {
        Self::new(get_board_dir())
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        ensure_dir(&self.dir)?;
        let path = self.key_path(key);
        std::fs::write(&path, value)?;
        tracing::trace!(
            target: "board::storage",
            path = %path.display(),
            bytes = value.len(),
            "Wrote key"
        );
        Ok(())
    }
}

/// In-memory store for tests and embedders that persist elsewhere.
#[derive(Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Loads both collections. Absent keys yield empty collections; a key that
/// exists but does not parse is propagated rather than discarded, since
/// silently dropping it would be indistinguishable from data loss.
pub fn load_board<S: KeyValueStore>(storage: &S) -> Result<BoardData, StorageError> {
    let tasks: Vec<Task> = match storage.get(TODOS_KEY)? {
        Some(content) => serde_json::from_str(&content)?,
        None => Vec::new(),
    };

    let tags: Vec<String> = match storage.get(TAGS_KEY)? {
        Some(content) => serde_json::from_str(&content)?,
        None => Vec::new(),
    };

    Ok(BoardData { tasks, tags })
}

/// Serializes and writes both collections.
pub fn save_board<S: KeyValueStore>(storage: &mut S, data: &BoardData) -> Result<(), StorageError> {
    let tasks = serde_json::to_string_pretty(&data.tasks)?;
    storage.set(TODOS_KEY, &tasks)?;

    let tags = serde_json::to_string_pretty(&data.tags)?;
    storage.set(TAGS_KEY, &tags)?;

    Ok(())
}
