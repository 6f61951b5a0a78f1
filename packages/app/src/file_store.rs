//! JSON-file-backed key-value store.
//!
//! One file holds a flat string map. Every write rewrites the whole file
//! through a temp-file rename, giving the atomic single-key set semantics
//! the engines assume.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use sightwords_engine::{KeyValueStore, StoreError, StoreResult};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_map(&self) -> StoreResult<HashMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(HashMap::new()),
            Err(err) => Err(StoreError::Backend(err.to_string())),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut map = self.read_map()?;
        Ok(map.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        let raw = serde_json::to_string_pretty(&map)?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, raw).map_err(|e| StoreError::Backend(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| StoreError::Backend(e.to_string()))?;
        log::debug!("wrote {key} to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sightwords_engine::{WordStore, HIGH_SCORE_KEY};
    use std::sync::Arc;

    #[test]
    fn test_get_on_missing_file_is_none() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let store = FileStore::new(dir.path().join("store.json"));
        assert!(store.get("anything").unwrap().is_none());
    }

    #[test]
    fn test_set_then_get_round_trip() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let store = FileStore::new(dir.path().join("store.json"));

        store.set(HIGH_SCORE_KEY, "7").unwrap();
        assert_eq!(store.get(HIGH_SCORE_KEY).unwrap().as_deref(), Some("7"));

        // Overwrite replaces the whole value.
        store.set(HIGH_SCORE_KEY, "9").unwrap();
        assert_eq!(store.get(HIGH_SCORE_KEY).unwrap().as_deref(), Some("9"));
    }

    #[test]
    fn test_keys_are_independent() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let store = FileStore::new(dir.path().join("store.json"));

        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_word_store_survives_reopen() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let path = dir.path().join("store.json");

        {
            let words = WordStore::new(Arc::new(FileStore::new(&path)));
            words.load().unwrap();
            words.add("zebra").unwrap();
        }

        // A fresh store over the same file sees the persisted list.
        let words = WordStore::new(Arc::new(FileStore::new(&path)));
        let list = words.load().unwrap();
        assert!(list.iter().any(|w| w.as_str() == "zebra"));
    }
}
