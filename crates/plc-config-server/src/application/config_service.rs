//! ConfigService: reads and replaces the stored configuration document.
//!
//! The service accepts any JSON object as a document.  Only the top-level
//! type is checked; field shapes are the editor's business, so documents
//! saved through the generic save path are stored unchanged.
//!
//! There are no partial updates: every save replaces the whole document and
//! the last completed save wins.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use plc_config_core::{decode_value, json_kind};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

/// Error type for document storage.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stored file is not valid JSON.
    #[error("stored document at {path} is not valid JSON: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document could not be serialized for writing.
    #[error("failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Error type for the config service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request body is not JSON.
    #[error("request body is not valid JSON: {0}")]
    MalformedJson(String),

    /// The request body is JSON but not an object.
    #[error("configuration document must be a JSON object, found {0}")]
    NotAnObject(&'static str),

    /// The store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Persistence for the single configuration document.
///
/// The file store is the production implementation; tests use in-memory
/// doubles.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Returns the stored document, or an empty object if none was saved yet.
    async fn load(&self) -> Result<Value, StoreError>;

    /// Replaces the stored document.
    async fn save(&self, document: Value) -> Result<(), StoreError>;
}

/// Use case for `GET /api/config` and `POST /api/config`.
pub struct ConfigService {
    store: Arc<dyn DocumentStore>,
}

impl ConfigService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Returns the current document.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Store`] if the store cannot be read.
    pub async fn get_document(&self) -> Result<Value, ServiceError> {
        Ok(self.store.load().await?)
    }

    /// Parses `body` and replaces the stored document with it.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::MalformedJson`] if `body` is not JSON.
    /// - [`ServiceError::NotAnObject`] if the top level is not an object.
    /// - [`ServiceError::Store`] if the write fails.
    pub async fn replace_document(&self, body: &[u8]) -> Result<(), ServiceError> {
        let document: Value =
            serde_json::from_slice(body).map_err(|e| ServiceError::MalformedJson(e.to_string()))?;
        if !document.is_object() {
            return Err(ServiceError::NotAnObject(json_kind(&document)));
        }

        // Logging only: saves from the list manager carry typed lists, other
        // documents are stored all the same.
        match decode_value(document.clone()) {
            Ok(doc) => info!(
                plc = doc.plc.len(),
                databases = doc.databases.len(),
                "saving configuration document"
            ),
            Err(e) => debug!("saving untyped configuration document: {e}"),
        }

        self.store.save(document).await?;
        Ok(())
    }
}
