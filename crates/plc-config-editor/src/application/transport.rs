//! The seam between the use cases and the `/api/config` backend.
//!
//! Both the list manager and the theme applier load through
//! [`ConfigTransport::fetch_document`], so there is one loader and one
//! document schema for both.  Every call returns a [`ClientError`] on failure;
//! nothing is fire-and-forget.

use async_trait::async_trait;
use plc_config_core::{CodecError, ConfigDocument};
use serde_json::Value;
use thiserror::Error;

/// Everything that can go wrong talking to the backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response: connection refused, DNS,
    /// timeout, or the body could not be read.
    #[error("network error talking to {url}: {message}")]
    Network { url: String, message: String },

    /// The backend answered with a non-2xx status.
    #[error("{url} answered with HTTP {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    /// The backend answered 2xx but the body is not a configuration document.
    #[error("malformed configuration from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: CodecError,
    },

    /// The document to send could not be serialized.
    #[error("failed to encode configuration: {0}")]
    Encode(#[source] CodecError),
}

impl ClientError {
    /// Short label for user-facing messages.
    pub fn kind(&self) -> &'static str {
        match self {
            ClientError::Network { .. } => "network error",
            ClientError::Status { .. } => "server error",
            ClientError::Parse { .. } => "invalid response",
            ClientError::Encode(_) => "encoding error",
        }
    }
}

/// Loads and stores the configuration document.
///
/// The HTTP implementation lives in the infrastructure layer; tests use
/// recording doubles.
#[async_trait]
pub trait ConfigTransport: Send + Sync {
    /// `GET /api/config`, decoded into a [`ConfigDocument`].
    async fn fetch_document(&self) -> Result<ConfigDocument, ClientError>;

    /// `POST /api/config` with `document` as the JSON body.
    ///
    /// The response body is not inspected beyond its status.
    async fn store_document(&self, document: &Value) -> Result<(), ClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message_names_status_and_url() {
        let err = ClientError::Status {
            url: "http://localhost:5000/api/config".to_string(),
            status: 503,
            body: "maintenance".to_string(),
        };

        let msg = err.to_string();

        assert!(msg.contains("503"));
        assert!(msg.contains("http://localhost:5000/api/config"));
        assert_eq!(err.kind(), "server error");
    }

    #[test]
    fn test_kinds_are_distinct() {
        let network = ClientError::Network {
            url: String::new(),
            message: String::new(),
        };
        let parse = ClientError::Parse {
            url: String::new(),
            source: CodecError::Malformed("x".to_string()),
        };
        assert_ne!(network.kind(), parse.kind());
    }
}
