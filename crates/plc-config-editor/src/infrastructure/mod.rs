//! Infrastructure layer for the editor.
//!
//! # Responsibilities
//!
//! - Sending `GET` / `POST /api/config` over HTTP
//! - Holding the page's style properties in memory
//! - Printing the record lists and notices to a terminal
//! - Reading and writing the TOML settings file
//!
//! # What does NOT belong here?
//!
//! - Deciding what goes into a saved document (that is the application layer)

pub mod console;
pub mod http_transport;
pub mod page;
pub mod settings;

pub use console::ConsoleRenderer;
pub use http_transport::HttpConfigTransport;
pub use page::PageStyles;
pub use settings::{EditorSettings, SettingsError};
