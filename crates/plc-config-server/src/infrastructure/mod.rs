//! Infrastructure layer for plc-config-server.
//!
//! # Responsibilities
//!
//! - Binding the HTTP listener and serving the warp routes
//! - Mapping service errors onto HTTP status codes and JSON error bodies
//! - Reading and writing the document file
//! - Stopping on the shutdown signal

pub mod http_server;
pub mod store;

pub use http_server::{bind_server, routes, run_server};
pub use store::JsonFileStore;
