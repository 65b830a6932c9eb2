//! JSON file persistence for the configuration document.
//!
//! The document lives in a single pretty-printed JSON file.  It is read once,
//! on the first request, and cached in memory; every save rewrites the file
//! and the cache together.
//!
//! # Write path
//!
//! ```text
//! serialize ──► <file>.tmp ──► rename over <file> ──► update cache
//! ```
//!
//! The rename replaces the old file in one step, so a crash mid-write leaves
//! either the old or the new document on disk, never half of one.  Writers
//! hold the cache's write lock for the whole sequence, so concurrent saves
//! are applied one after the other and the last one wins.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::application::{DocumentStore, StoreError};

/// File-backed [`DocumentStore`].
pub struct JsonFileStore {
    path: PathBuf,
    /// `None` until the file has been read.
    cache: RwLock<Option<Value>>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: RwLock::new(None),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Reads the file; a missing file is an empty document.
    async fn read_file(&self) -> Result<Value, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => {
                let value =
                    serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
                        path: self.path.clone(),
                        source,
                    })?;
                debug!("loaded configuration document from {}", self.path.display());
                Ok(value)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(
                    "no configuration document at {} yet; serving an empty one",
                    self.path.display()
                );
                Ok(Value::Object(Map::new()))
            }
            Err(source) => Err(StoreError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn load(&self) -> Result<Value, StoreError> {
        if let Some(doc) = self.cache.read().await.as_ref() {
            return Ok(doc.clone());
        }

        let mut cache = self.cache.write().await;
        // Another task may have filled the cache while we waited for the lock.
        if let Some(doc) = cache.as_ref() {
            return Ok(doc.clone());
        }
        let doc = self.read_file().await?;
        *cache = Some(doc.clone());
        Ok(doc)
    }

    async fn save(&self, document: Value) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(&document)?;
        let mut cache = self.cache.write().await;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|source| StoreError::Io {
                    path: dir.to_path_buf(),
                    source,
                })?;
        }

        let tmp = self.temp_path();
        tokio::fs::write(&tmp, content)
            .await
            .map_err(|source| StoreError::Io {
                path: tmp.clone(),
                source,
            })?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })?;

        *cache = Some(document);
        debug!("saved configuration document to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_missing_file_loads_as_empty_object() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("config.json"));

        // Act
        let doc = store.load().await.unwrap();

        // Assert
        assert_eq!(doc, json!({}));
    }

    #[tokio::test]
    async fn test_save_writes_file_and_updates_cache() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let store = JsonFileStore::new(&path);
        let doc = json!({"plc": [], "databases": [], "ui": {"navPosition": "top"}});

        // Act
        store.save(doc.clone()).await.unwrap();

        // Assert
        assert_eq!(store.load().await.unwrap(), doc);
        let on_disk: Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk, doc);
        assert!(!store.temp_path().exists(), "temp file must be renamed away");
    }

    #[tokio::test]
    async fn test_saved_document_survives_a_new_store_instance() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        JsonFileStore::new(&path)
            .save(json!({"databases": [{"id": 1}]}))
            .await
            .unwrap();

        let reopened = JsonFileStore::new(&path);

        assert_eq!(
            reopened.load().await.unwrap(),
            json!({"databases": [{"id": 1}]})
        );
    }

    #[tokio::test]
    async fn test_save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("config.json");
        let store = JsonFileStore::new(&path);

        store.save(json!({})).await.unwrap();

        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_reported() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ definitely not json").unwrap();
        let store = JsonFileStore::new(&path);

        // Act
        let result = store.load().await;

        // Assert
        assert!(matches!(result, Err(StoreError::Corrupt { .. })));
    }

    #[tokio::test]
    async fn test_save_repairs_a_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "garbage").unwrap();
        let store = JsonFileStore::new(&path);

        store.save(json!({"ok": true})).await.unwrap();

        assert_eq!(store.load().await.unwrap(), json!({"ok": true}));
    }

    #[test]
    fn test_temp_path_sits_next_to_the_data_file() {
        let store = JsonFileStore::new("/var/lib/plc/config.json");
        assert_eq!(
            store.temp_path(),
            PathBuf::from("/var/lib/plc/config.json.tmp")
        );
    }
}
