//! High score persistence
//!
//! The engine only ever compares against one stored integer; everything
//! behind [`ScoreStore`] is replaceable (a JSON file here, an in-memory
//! map in tests).

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Key under which the high score is persisted
pub const HIGH_SCORE_KEY: &str = "snakeHighScore";

/// A key-value store holding small integer values
pub trait ScoreStore {
    /// Read a value, `None` if the key has never been written
    fn get(&self, key: &str) -> Result<Option<u32>>;

    /// Write a value, overwriting any previous one
    fn set(&mut self, key: &str, value: u32) -> Result<()>;
}

/// Store backed by a JSON object on disk
///
/// The file is read and rewritten whole on each access; at one integer
/// per session that is plenty.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<HashMap<String, u32>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let json = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read score file {:?}", self.path))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse score file {:?}", self.path))
    }

    fn write_all(&self, values: &HashMap<String, u32>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {:?}", parent))?;
            }
        }
        let json = serde_json::to_string_pretty(values).context("Failed to serialize scores")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write score file {:?}", self.path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<u32>> {
        Ok(self.read_all()?.get(key).copied())
    }

    fn set(&mut self, key: &str, value: u32) -> Result<()> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value);
        self.write_all(&values)
    }
}

/// In-memory store for tests and headless use
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, u32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<u32>> {
        Ok(self.values.get(key).copied())
    }

    fn set(&mut self, key: &str, value: u32) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(HIGH_SCORE_KEY).unwrap(), None);

        store.set(HIGH_SCORE_KEY, 42).unwrap();
        assert_eq!(store.get(HIGH_SCORE_KEY).unwrap(), Some(42));

        store.set(HIGH_SCORE_KEY, 50).unwrap();
        assert_eq!(store.get(HIGH_SCORE_KEY).unwrap(), Some(50));
    }

    #[test]
    fn test_file_store_missing_file_reads_none() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("scores.json"));
        assert_eq!(store.get(HIGH_SCORE_KEY).unwrap(), None);
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scores.json");

        let mut store = JsonFileStore::new(&path);
        store.set(HIGH_SCORE_KEY, 17).unwrap();
        assert_eq!(store.get(HIGH_SCORE_KEY).unwrap(), Some(17));

        // A fresh store instance sees the persisted value
        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.get(HIGH_SCORE_KEY).unwrap(), Some(17));
    }

    #[test]
    fn test_file_store_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("scores.json");

        let mut store = JsonFileStore::new(&path);
        store.set(HIGH_SCORE_KEY, 3).unwrap();
        assert_eq!(store.get(HIGH_SCORE_KEY).unwrap(), Some(3));
    }
}
