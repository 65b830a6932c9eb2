//! JSON codec for the configuration document.
//!
//! Wire format: a single JSON object (UTF-8 text), as produced by
//! `serde_json`.  The top level must be an object; arrays, strings and other
//! scalars are rejected before field decoding so the error names the real
//! problem.

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::domain::document::ConfigDocument;

/// Errors that can occur while encoding or decoding a document.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The text is not JSON, or the top level is not an object.
    #[error("malformed configuration document: {0}")]
    Malformed(String),

    /// The document could not be serialized.
    #[error("failed to encode configuration document: {0}")]
    Encode(#[from] serde_json::Error),
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Encodes a document as compact JSON text.
///
/// # Errors
///
/// Returns [`CodecError::Encode`] if serialization fails.
pub fn encode_document(document: &ConfigDocument) -> Result<String, CodecError> {
    Ok(serde_json::to_string(document)?)
}

/// Converts a document into a JSON value, ready to be sent as a request body.
///
/// # Errors
///
/// Returns [`CodecError::Encode`] if serialization fails.
pub fn document_to_value(document: &ConfigDocument) -> Result<Value, CodecError> {
    Ok(serde_json::to_value(document)?)
}

/// Decodes a document from JSON text.
///
/// # Errors
///
/// Returns [`CodecError::Malformed`] if the text is not valid JSON or the top
/// level is not an object.  Badly typed fields inside the object load as
/// their defaults (see [`ConfigDocument`]).
///
/// # Examples
///
/// ```rust
/// use plc_config_core::decode_document;
///
/// let doc = decode_document(r#"{"databases": []}"#).unwrap();
/// assert!(doc.plc.is_empty());
/// ```
pub fn decode_document(text: &str) -> Result<ConfigDocument, CodecError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| CodecError::Malformed(e.to_string()))?;
    decode_value(value)
}

/// Decodes a document from an already parsed JSON value.
///
/// # Errors
///
/// Same as [`decode_document`], minus the JSON syntax case.
pub fn decode_value(value: Value) -> Result<ConfigDocument, CodecError> {
    if !value.is_object() {
        return Err(CodecError::Malformed(format!(
            "expected a JSON object at the top level, found {}",
            json_kind(&value)
        )));
    }
    let document: ConfigDocument =
        serde_json::from_value(value).map_err(|e| CodecError::Malformed(e.to_string()))?;
    debug!(
        plc = document.plc.len(),
        databases = document.databases.len(),
        "decoded configuration document"
    );
    Ok(document)
}

/// Human-readable name of a JSON value's type, for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
