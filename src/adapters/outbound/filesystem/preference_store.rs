use std::collections::HashMap;
use std::path::PathBuf;

use crate::ports::outbound::PreferenceStore;
use crate::shared::error::ComplyError;
use crate::shared::Result;

/// FileSystemPreferenceStore adapter persisting preferences as a small
/// JSON object on disk.
///
/// Absent files read as "never set"; writes create the file (and its
/// parent directory) on demand and preserve unrelated keys.
pub struct FileSystemPreferenceStore {
    path: PathBuf,
}

impl FileSystemPreferenceStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_all(&self) -> Result<HashMap<String, bool>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| ComplyError::PreferenceStoreError {
                path: self.path.clone(),
                details: e.to_string(),
            })?;
        let values = serde_json::from_str(&content).map_err(|e| {
            ComplyError::PreferenceStoreError {
                path: self.path.clone(),
                details: e.to_string(),
            }
        })?;
        Ok(values)
    }
}

impl PreferenceStore for FileSystemPreferenceStore {
    fn load_bool(&self, key: &str) -> Result<Option<bool>> {
        Ok(self.read_all()?.get(key).copied())
    }

    fn store_bool(&self, key: &str, value: bool) -> Result<()> {
        let mut values = self.read_all().unwrap_or_default();
        values.insert(key.to_string(), value);
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ComplyError::PreferenceStoreError {
                        path: self.path.clone(),
                        details: e.to_string(),
                    }
                })?;
            }
        }
        let content = serde_json::to_string_pretty(&values).map_err(|e| {
            ComplyError::PreferenceStoreError {
                path: self.path.clone(),
                details: e.to_string(),
            }
        })?;
        std::fs::write(&self.path, content).map_err(|e| ComplyError::PreferenceStoreError {
            path: self.path.clone(),
            details: e.to_string(),
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::DARK_MODE_KEY;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_missing_file_is_unset() {
        let dir = TempDir::new().unwrap();
        let store = FileSystemPreferenceStore::new(dir.path().join("preferences.json"));
        assert_eq!(store.load_bool(DARK_MODE_KEY).unwrap(), None);
    }

    #[test]
    fn test_store_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = FileSystemPreferenceStore::new(dir.path().join("preferences.json"));
        store.store_bool(DARK_MODE_KEY, true).unwrap();
        assert_eq!(store.load_bool(DARK_MODE_KEY).unwrap(), Some(true));
        store.store_bool(DARK_MODE_KEY, false).unwrap();
        assert_eq!(store.load_bool(DARK_MODE_KEY).unwrap(), Some(false));
    }

    #[test]
    fn test_store_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested").join("preferences.json");
        let store = FileSystemPreferenceStore::new(nested);
        store.store_bool(DARK_MODE_KEY, true).unwrap();
        assert_eq!(store.load_bool(DARK_MODE_KEY).unwrap(), Some(true));
    }

    #[test]
    fn test_store_preserves_other_keys() {
        let dir = TempDir::new().unwrap();
        let store = FileSystemPreferenceStore::new(dir.path().join("preferences.json"));
        store.store_bool("other_flag", true).unwrap();
        store.store_bool(DARK_MODE_KEY, true).unwrap();
        assert_eq!(store.load_bool("other_flag").unwrap(), Some(true));
    }

    #[test]
    fn test_load_error_on_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "not json").unwrap();
        let store = FileSystemPreferenceStore::new(path);
        assert!(store.load_bool(DARK_MODE_KEY).is_err());
    }
}
