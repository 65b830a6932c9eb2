//! Application layer for plc-config-server.
//!
//! Knows *what* a get or a save of the configuration document means, and
//! delegates *how* the document is stored to a [`DocumentStore`].
//!
//! # What does NOT belong here?
//!
//! - HTTP status codes and routing (that is infrastructure)
//! - File paths and temp-file handling (that is the store)

pub mod config_service;

pub use config_service::{ConfigService, DocumentStore, ServiceError, StoreError};
