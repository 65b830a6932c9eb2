//! # plc-config-core
//!
//! Shared library for the PLC configuration editor containing the
//! configuration document schema, the record id generator, the theme style
//! model and the JSON codec used on the `/api/config` endpoint.
//!
//! This crate is used by both the editor (client) and the server.
//! It has zero dependencies on network sockets, file systems or UI toolkits.
//!
//! # Architecture overview
//!
//! The editor keeps two ordered lists in memory (PLC connection records and
//! database connection records) and persists them, together with a couple of
//! UI settings, as one JSON document:
//!
//! ```json
//! {
//!   "plc":       [{ "id": 1, "name": "A", "ip": "10.0.0.1", "tags": [] }],
//!   "databases": [{ "id": 2, "type": "postgres", "connection_string": "...", "name": "main" }],
//!   "ui":        { "navPosition": "top", "themeColor": "#000" }
//! }
//! ```
//!
//! - **`domain`** – The records, the document, and the theme style model that
//!   maps `navBar` / `theme` settings onto presentation properties.
//!
//! - **`protocol`** – Encoding and decoding of the document as JSON text.

pub mod domain;
pub mod protocol;

// Re-export the most-used types at the crate root so callers can write
// `plc_config_core::ConfigDocument` instead of the full module path.
pub use domain::document::{ConfigDocument, UiSettings};
pub use domain::ids::{RecordId, RecordIdGenerator};
pub use domain::records::{DatabaseConnection, PlcRecord};
pub use domain::theme::{
    ElementId, NavBarStyle, StyleAssignment, StyleProperty, ThemeConfig, ThemeStyle,
};
pub use protocol::codec::{
    decode_document, decode_value, document_to_value, encode_document, json_kind, CodecError,
};
