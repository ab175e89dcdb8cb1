use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::error::AppError;

pub const AUTH_STORAGE_KEY: &str = "auth-storage";
pub const DATA_STORAGE_KEY: &str = "data-storage";

/// Blob format version. There is no migration: a blob that no longer parses is discarded.
pub const STORAGE_VERSION: u32 = 0;

#[derive(Debug, Serialize, Deserialize)]
struct PersistedBlob<T> {
    state: T,
    version: u32,
}

enum Backend {
    File(PathBuf),
    Memory(Mutex<HashMap<String, String>>),
}

/// String key/value persistence with typed JSON helpers on top.
pub struct Storage {
    backend: Backend,
}

impl Storage {
    /// One `<key>.json` file per key inside `dir`.
    pub fn file(dir: impl Into<PathBuf>) -> Self {
        Self {
            backend: Backend::File(dir.into()),
        }
    }

    pub fn memory() -> Self {
        Self {
            backend: Backend::Memory(Mutex::new(HashMap::new())),
        }
    }

    fn path_for(dir: &Path, key: &str) -> PathBuf {
        dir.join(format!("{}.json", key))
    }

    pub fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        match &self.backend {
            Backend::File(dir) => {
                let path = Self::path_for(dir, key);
                if !path.exists() {
                    return Ok(None);
                }
                Ok(Some(fs::read_to_string(path)?))
            }
            Backend::Memory(items) => {
                let items = items
                    .lock()
                    .map_err(|_| AppError::Storage("memory storage poisoned".to_string()))?;
                Ok(items.get(key).cloned())
            }
        }
    }

    pub fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        match &self.backend {
            Backend::File(dir) => {
                fs::create_dir_all(dir)?;
                fs::write(Self::path_for(dir, key), value)?;
                Ok(())
            }
            Backend::Memory(items) => {
                let mut items = items
                    .lock()
                    .map_err(|_| AppError::Storage("memory storage poisoned".to_string()))?;
                items.insert(key.to_string(), value.to_string());
                Ok(())
            }
        }
    }

    pub fn remove_item(&self, key: &str) -> Result<(), AppError> {
        match &self.backend {
            Backend::File(dir) => {
                let path = Self::path_for(dir, key);
                if path.exists() {
                    fs::remove_file(path)?;
                }
                Ok(())
            }
            Backend::Memory(items) => {
                let mut items = items
                    .lock()
                    .map_err(|_| AppError::Storage("memory storage poisoned".to_string()))?;
                items.remove(key);
                Ok(())
            }
        }
    }

    /// Reads a blob. Missing, unreadable or structurally stale blobs all yield `None`;
    /// a blob that no longer parses is removed.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                log::warn!("Could not read {}: {}", key, err);
                return None;
            }
        };

        match serde_json::from_str::<PersistedBlob<T>>(&raw) {
            Ok(blob) => {
                if blob.version != STORAGE_VERSION {
                    log::warn!(
                        "{} has version {}, expected {}",
                        key,
                        blob.version,
                        STORAGE_VERSION
                    );
                }
                Some(blob.state)
            }
            Err(err) => {
                log::warn!("Discarding unreadable {} blob: {}", key, err);
                if let Err(err) = self.remove_item(key) {
                    log::error!("Failed to remove {}: {}", key, err);
                }
                None
            }
        }
    }

    pub fn save<T: Serialize>(&self, key: &str, state: &T) -> Result<(), AppError> {
        let raw = serde_json::to_string(&PersistedBlob {
            state,
            version: STORAGE_VERSION,
        })?;
        self.set_item(key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn test_memory_round_trip() {
        let storage = Storage::memory();
        assert!(storage.load::<Sample>("missing").is_none());

        let sample = Sample {
            name: "dayflow".to_string(),
            count: 3,
        };
        storage.save("sample", &sample).unwrap();
        assert_eq!(storage.load::<Sample>("sample"), Some(sample));

        storage.remove_item("sample").unwrap();
        assert!(storage.get_item("sample").unwrap().is_none());
    }

    #[test]
    fn test_file_blob_layout() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::file(dir.path().join("nested"));
        storage
            .save(
                DATA_STORAGE_KEY,
                &Sample {
                    name: "x".to_string(),
                    count: 1,
                },
            )
            .unwrap();

        let raw = fs::read_to_string(dir.path().join("nested/data-storage.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], 0);
        assert_eq!(value["state"]["name"], "x");
    }

    #[test]
    fn test_stale_blob_is_discarded() {
        let storage = Storage::memory();
        storage
            .set_item("sample", r#"{"state":{"unexpected":true},"version":0}"#)
            .unwrap();
        assert!(storage.load::<Sample>("sample").is_none());

        storage.set_item("sample", "not json").unwrap();
        assert!(storage.load::<Sample>("sample").is_none());
        assert!(storage.get_item("sample").unwrap().is_none());
    }
}
