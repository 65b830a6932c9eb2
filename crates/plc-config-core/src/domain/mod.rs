//! Domain entities for the PLC configuration editor.
//!
//! This module contains pure data types and transformations with no
//! infrastructure dependencies: no HTTP, no files, no rendering.
//!
//! Code in outer layers (the editor's application layer, the server's store)
//! depends on these types, but the domain never depends on them.  This keeps
//! every rule here testable with plain `#[test]` functions.

/// The configuration document exchanged with `/api/config`.
pub mod document;

/// Timestamp-based record identifiers.
pub mod ids;

/// Field decoders that tolerate badly typed values.
mod lenient;

/// PLC and database connection records.
pub mod records;

/// Navigation bar / theme settings and the style assignments they produce.
pub mod theme;
