//! Forgiving field decoders for documents written by other clients.
//!
//! The backend stores whatever JSON object it is given, so a stored document
//! may hold a `plc` that is not a list, a `null` where a string belongs, or a
//! font size written as `"14"`.  One such field must not make the rest of the
//! document unreadable: each decoder here falls back to the field's default
//! (or drops the one bad list entry) and logs what it ignored.
//!
//! Used through `#[serde(default, deserialize_with = "...")]`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

use crate::protocol::codec::json_kind;

/// Decodes `T`, mapping `null` and values of the wrong shape to
/// `T::default()`.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(T::default());
    }
    let kind = json_kind(&value);
    Ok(serde_json::from_value(value).unwrap_or_else(|e| {
        warn!("ignoring malformed field ({kind}): {e}");
        T::default()
    }))
}

/// Decodes a list, keeping the entries that decode and dropping the rest.
///
/// Anything other than an array (including `null`) is an empty list.
pub(crate) fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        other => {
            warn!("expected a list, found {}; loading it as empty", json_kind(&other));
            return Ok(Vec::new());
        }
    };
    Ok(items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("dropping list entry {index}: {e}");
                None
            }
        })
        .collect())
}

/// Decodes a pixel size given either as a number or as a numeric string.
pub(crate) fn pixels<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches("px").trim().parse().ok().or_else(|| {
            warn!("ignoring non-numeric size {s:?}");
            None
        }),
        other => {
            warn!("ignoring size given as {}", json_kind(&other));
            None
        }
    })
}
