use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Storage key for the day-record history blob.
pub const HISTORY_KEY: &str = "history";
/// Storage key for the goal list blob.
pub const GOALS_KEY: &str = "goals";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("reading blob '{key}': {source}")]
    Read {
        key: String,
        source: std::io::Error,
    },
    #[error("blob '{key}' is not valid JSON: {source}")]
    Decode {
        key: String,
        source: serde_json::Error,
    },
    #[error("encoding blob '{key}': {source}")]
    Encode {
        key: String,
        source: serde_json::Error,
    },
    #[error("writing blob '{key}': {source}")]
    Write {
        key: String,
        source: std::io::Error,
    },
}

/// Key-value persistence for JSON blobs, one file per key.
///
/// The contract is deliberately forgiving: reads degrade to "no data" and
/// writes are best-effort. In-memory state stays authoritative either way;
/// failures are logged, never surfaced.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn open(dir: PathBuf) -> std::io::Result<Self> {
        std::fs::create_dir_all(&dir)?;
        Ok(JsonStore { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// `None` when the blob is absent, unreadable, or unparseable; the
    /// caller substitutes its default state. A corrupt blob is logged.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.try_read(key) {
            Ok(value) => value,
            Err(err) => {
                warn!("{}; treating as no data", err);
                None
            }
        }
    }

    fn try_read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&path).map_err(|source| StoreError::Read {
            key: key.to_string(),
            source,
        })?;
        let value = serde_json::from_str(&raw).map_err(|source| StoreError::Decode {
            key: key.to_string(),
            source,
        })?;
        Ok(Some(value))
    }

    /// Best-effort write; a failure is logged and the in-memory state is
    /// kept regardless.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) {
        if let Err(err) = self.try_write(key, value) {
            warn!("{}; in-memory state kept", err);
        }
    }

    fn try_write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(value).map_err(|source| StoreError::Encode {
            key: key.to_string(),
            source,
        })?;
        std::fs::write(self.path_for(key), raw).map_err(|source| StoreError::Write {
            key: key.to_string(),
            source,
        })
    }

    /// Remove a blob entirely, so the next read sees "never written".
    pub fn remove(&self, key: &str) {
        let path = self.path_for(key);
        if path.exists() {
            if let Err(err) = std::fs::remove_file(&path) {
                warn!("removing blob '{}': {}", key, err);
            }
        }
    }

    /// Whether the key has ever been written (and survived).
    pub fn contains(&self, key: &str) -> bool {
        self.path_for(key).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn temp_store() -> (tempfile::TempDir, JsonStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path().to_path_buf()).unwrap();
        (dir, store)
    }

    #[test]
    fn absent_key_reads_as_none() {
        let (_dir, store) = temp_store();
        assert_eq!(store.read::<Vec<String>>("missing"), None);
        assert!(!store.contains("missing"));
    }

    #[test]
    fn write_then_read_round_trips() {
        let (_dir, store) = temp_store();
        let mut map = BTreeMap::new();
        map.insert("2026-02-18".to_string(), 7u8);
        store.write("scores", &map);
        assert!(store.contains("scores"));
        assert_eq!(store.read::<BTreeMap<String, u8>>("scores"), Some(map));
    }

    #[test]
    fn corrupt_blob_reads_as_none() {
        let (dir, store) = temp_store();
        std::fs::write(dir.path().join("bad.json"), "{not json").unwrap();
        assert_eq!(store.read::<Vec<String>>("bad"), None);
    }

    #[test]
    fn remove_makes_key_never_written() {
        let (_dir, store) = temp_store();
        store.write("gone", &vec![1, 2, 3]);
        store.remove("gone");
        assert!(!store.contains("gone"));
        assert_eq!(store.read::<Vec<i32>>("gone"), None);
    }
}
