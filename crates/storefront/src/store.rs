//! Persisted key-value store.
//!
//! Each logical entity (cart lines, user profile, theme) lives under its own
//! key, serialized as one JSON document per key in the configured data
//! directory. Keys are independent units of persistence; there are no
//! cross-key transactions and no schema versioning. Every value is
//! reconstructible from its default, so a missing or malformed document is
//! replaced by the caller's default rather than surfaced as an error.

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Logical keys for persisted entities.
pub mod keys {
    /// Key for the cart line list.
    pub const CART_ITEMS: &str = "cart-items";

    /// Key for the user profile record.
    pub const USER_PROFILE: &str = "user-profile";

    /// Key for the theme preference.
    pub const THEME: &str = "theme";
}

/// Error type for store write operations.
///
/// Reads never fail; they fall back to the caller's default.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// File-backed key-value store.
///
/// Cheaply cloneable; all clones share one lock, so read-modify-write via
/// [`KvStore::update`] is a single unit even when the store is driven from
/// multiple threads. Single-writer-at-a-time is all the serialization this
/// corpus needs.
#[derive(Clone)]
pub struct KvStore {
    inner: Arc<KvStoreInner>,
}

struct KvStoreInner {
    root: PathBuf,
    lock: Mutex<()>,
}

impl KvStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self {
            inner: Arc::new(KvStoreInner {
                root,
                lock: Mutex::new(()),
            }),
        })
    }

    /// Read the value stored under `key`, or `default` if the key is
    /// missing or its document does not deserialize.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let _guard = self.guard();
        self.read_value(key).unwrap_or(default)
    }

    /// Serialize `value` and write it under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if serialization or the write fails.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let _guard = self.guard();
        self.write_value(key, value)
    }

    /// Read-modify-write: apply `f` to the current value (or `default`)
    /// and persist the result, all under the store lock.
    ///
    /// Returns the value that was written.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if serialization or the write fails.
    pub fn update<T, F>(&self, key: &str, default: T, f: F) -> Result<T, StoreError>
    where
        T: DeserializeOwned + Serialize,
        F: FnOnce(&mut T),
    {
        let _guard = self.guard();
        let mut value = self.read_value(key).unwrap_or(default);
        f(&mut value);
        self.write_value(key, &value)?;
        Ok(value)
    }

    /// Acquire the store lock, recovering from poisoning.
    fn guard(&self) -> MutexGuard<'_, ()> {
        self.inner
            .lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.inner.root.join(format!("{key}.json"))
    }

    /// Read and deserialize `key`, returning `None` for any failure.
    ///
    /// Caller must hold the store lock.
    fn read_value<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read persisted value, using default");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "malformed persisted value, using default");
                None
            }
        }
    }

    /// Serialize and write `key`.
    ///
    /// Caller must hold the store lock.
    fn write_value<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(value)?;
        fs::write(self.path_for(key), json)?;
        Ok(())
    }
}

impl std::fmt::Debug for KvStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KvStore")
            .field("root", &self.inner.root)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    fn open_temp() -> (KvStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = KvStore::open(dir.path()).unwrap();
        (store, dir)
    }

    #[test]
    fn test_get_missing_key_returns_default() {
        let (store, _dir) = open_temp();
        let value: Vec<String> = store.get("nothing-here", Vec::new());
        assert!(value.is_empty());
    }

    #[test]
    fn test_set_then_get_roundtrip() {
        let (store, _dir) = open_temp();
        let sample = Sample {
            name: "widget".to_string(),
            count: 3,
        };

        store.set("sample", &sample).unwrap();
        let loaded: Sample = store.get(
            "sample",
            Sample {
                name: String::new(),
                count: 0,
            },
        );
        assert_eq!(loaded, sample);
    }

    #[test]
    fn test_get_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = KvStore::open(dir.path()).unwrap();
            store.set("count", &42_u32).unwrap();
        }

        let reopened = KvStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("count", 0_u32), 42);
    }

    #[test]
    fn test_malformed_document_returns_default() {
        let (store, dir) = open_temp();
        std::fs::write(dir.path().join("broken.json"), "{not json!").unwrap();

        let value: u32 = store.get("broken", 7);
        assert_eq!(value, 7);
    }

    #[test]
    fn test_wrong_shape_returns_default() {
        let (store, _dir) = open_temp();
        store.set("shape", &"just a string").unwrap();

        let value: Sample = store.get(
            "shape",
            Sample {
                name: "default".to_string(),
                count: 1,
            },
        );
        assert_eq!(value.name, "default");
    }

    #[test]
    fn test_update_is_read_modify_write() {
        let (store, _dir) = open_temp();
        store.set("counter", &10_u32).unwrap();

        let written = store.update("counter", 0_u32, |n| *n += 5).unwrap();
        assert_eq!(written, 15);
        assert_eq!(store.get("counter", 0_u32), 15);
    }

    #[test]
    fn test_update_missing_key_starts_from_default() {
        let (store, _dir) = open_temp();
        let written = store
            .update("fresh", Vec::new(), |v: &mut Vec<u32>| v.push(1))
            .unwrap();
        assert_eq!(written, vec![1]);
    }

    #[test]
    fn test_keys_are_independent() {
        let (store, _dir) = open_temp();
        store.set("a", &1_u32).unwrap();
        store.set("b", &2_u32).unwrap();

        assert_eq!(store.get("a", 0_u32), 1);
        assert_eq!(store.get("b", 0_u32), 2);
    }
}
