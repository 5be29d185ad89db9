//! Key/value storage backends for persisted state.
//!
//! The original application kept its one blob in browser localStorage;
//! here the same `get`/`set` surface is a trait so the event codec output
//! can live in a file, in memory for tests, or wherever a frontend puts it.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::CalResult;

/// The well-known key the encoded event list is stored under.
pub const STORAGE_KEY: &str = "calendar_events";

/// Synchronous key/value storage. `get` of an unknown key is `None`,
/// which callers treat as "no persisted data", not an error.
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> CalResult<()>;
}

/// File-backed storage: one `<key>.json` file per key inside a directory.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: PathBuf) -> Self {
        FileStorage { dir }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        // Unreadable is treated the same as absent.
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> CalResult<()> {
        std::fs::create_dir_all(&self.dir)?;

        let path = self.key_path(key);
        let temp = path.with_extension("json.tmp");

        // Write-then-rename so a crash never leaves a truncated file.
        std::fs::write(&temp, value)?;
        std::fs::rename(&temp, &path)?;
        Ok(())
    }
}

/// In-memory storage, used by tests and embedding frontends.
#[derive(Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> CalResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
