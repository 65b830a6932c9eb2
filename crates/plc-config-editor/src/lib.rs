//! plc-config-editor library crate.
//!
//! The client side of the PLC config editor.  Two independent modules talk to
//! the `/api/config` backend:
//!
//! - the **config list manager** keeps the PLC and database connection lists,
//!   adds entries, renders them, and saves them with the UI form values;
//! - the **theme applier** loads the navigation bar / theme settings and
//!   applies them as style properties, and offers a generic save.
//!
//! # Architecture
//!
//! ```text
//! CLI (main.rs)
//!   ↕
//! application/
//!   ├── config_list     ConfigListManager + Renderer seam
//!   ├── theme_applier   ThemeApplier + Presentation seam
//!   └── transport       ConfigTransport seam + ClientError
//! infrastructure/
//!   ├── http_transport  reqwest implementation of ConfigTransport
//!   ├── page            in-memory Presentation (PageStyles)
//!   ├── console         text Renderer
//!   └── settings        TOML settings file
//! ```
//!
//! The application layer only sees traits, so every use case is tested with
//! in-memory doubles; the infrastructure layer is tested against a mock HTTP
//! server and the real backend.

/// Application layer: use cases and the traits they depend on.
pub mod application;

/// Infrastructure layer: HTTP, page model, console output, settings file.
pub mod infrastructure;
