//! PLC and database connection records.
//!
//! Both record kinds share one lifecycle: created empty by an "add" action,
//! filled in by later form edits, and persisted as part of the configuration
//! document.  Field contents are free text; IP addresses and connection
//! strings are not validated.
//!
//! Every field has a default, and a missing, `null` or wrongly typed value
//! loads as that default, so a record stored by another client still loads.

use serde::{Deserialize, Serialize};

use crate::domain::ids::RecordId;
use crate::domain::lenient;

/// A PLC connection entry.
///
/// Wire shape: `{ "id": 1, "name": "", "ip": "", "tags": [] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlcRecord {
    /// Creation timestamp in Unix milliseconds.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub id: RecordId,
    /// Display name.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: String,
    /// Address of the controller, free text.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub ip: String,
    /// Tag names read from the controller, in display order.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub tags: Vec<String>,
}

impl PlcRecord {
    /// Creates a record with the given id and all other fields empty.
    pub fn empty(id: RecordId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

/// A database connection entry.
///
/// Wire shape: `{ "id": 1, "type": "", "connection_string": "", "name": "" }`.
/// The `type` key is a Rust keyword, hence the `kind` field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConnection {
    /// Creation timestamp in Unix milliseconds.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub id: RecordId,
    /// Database engine, e.g. `"sqlite"` or `"postgres"`.
    #[serde(rename = "type", default, deserialize_with = "lenient::or_default")]
    pub kind: String,
    /// Driver-specific connection string.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub connection_string: String,
    /// Display name.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: String,
}

impl DatabaseConnection {
    /// Creates a connection with the given id and all other fields empty.
    pub fn empty(id: RecordId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}
