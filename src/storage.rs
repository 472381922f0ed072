//! Key-value persistence for the bookmark collection.

use log::{debug, warn};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::Result;
use crate::model::Recipe;

/// Key under which the bookmark collection is stored
pub const BOOKMARKS_KEY: &str = "bookmarks";

/// Synchronous string key-value store
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes `<key>.json.tmp` then renames it over `<key>.json`, so readers
    /// see either the old value or the new one.
    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

/// In-process store, handy for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    writes: Mutex<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` calls so far
    pub fn writes(&self) -> usize {
        *self.writes.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value.to_string());
        *self.writes.lock().unwrap_or_else(|e| e.into_inner()) += 1;
        Ok(())
    }
}

/// Read the stored bookmark collection.
///
/// Nothing stored yields an empty collection. So does a corrupt entry, with a
/// warning, so a damaged file never prevents startup.
pub fn load_bookmarks(store: &dyn KeyValueStore) -> Result<Vec<Recipe>> {
    let Some(raw) = store.get(BOOKMARKS_KEY)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str::<Vec<Recipe>>(&raw) {
        Ok(bookmarks) => Ok(bookmarks),
        Err(e) => {
            warn!("Ignoring unreadable stored bookmarks: {}", e);
            Ok(Vec::new())
        }
    }
}

/// Overwrite the stored bookmark collection with `bookmarks`.
pub fn persist_bookmarks(store: &dyn KeyValueStore, bookmarks: &[Recipe]) -> Result<()> {
    let json = serde_json::to_string(bookmarks)?;
    store.set(BOOKMARKS_KEY, &json)?;
    debug!("Persisted {} bookmarks", bookmarks.len());
    Ok(())
}
