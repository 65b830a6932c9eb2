//! plc-config-server library crate.
//!
//! The backend collaborator of the PLC config editor: it serves the
//! configuration document at `/api/config` and persists every saved document
//! to a JSON file.
//!
//! # Architecture
//!
//! ```text
//! Editor (JSON over HTTP)
//!         ↕
//! [plc-config-server]
//!   ├── domain/           ServerConfig
//!   ├── application/      ConfigService: get / replace the document
//!   └── infrastructure/
//!         ├── http_server/ warp routes, rejection handling, bind + serve
//!         └── store/       JSON file store with an in-memory cache
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no I/O.
//! - `application` depends on `domain`, `plc-config-core` and the
//!   [`application::DocumentStore`] trait only.
//! - `infrastructure` depends on all other layers plus `tokio` and `warp`.

/// Domain layer: server configuration.
pub mod domain;

/// Application layer: document get/replace rules.
pub mod application;

/// Infrastructure layer: HTTP server and file store.
pub mod infrastructure;
