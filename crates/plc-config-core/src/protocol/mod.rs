//! Protocol module containing the JSON codec for the configuration document.

pub mod codec;

pub use codec::{decode_document, decode_value, document_to_value, encode_document, json_kind, CodecError};
