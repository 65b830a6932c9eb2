//! HTTP implementation of [`ConfigTransport`] using `reqwest`.
//!
//! Requests:
//!
//! ```text
//! GET  {base}/api/config                                   → 2xx + JSON document
//! POST {base}/api/config  Content-Type: application/json   → 2xx (body ignored)
//! ```
//!
//! Failure mapping:
//!
//! | What happened                              | Error                     |
//! |--------------------------------------------|---------------------------|
//! | connect/timeout/body read failed           | [`ClientError::Network`]  |
//! | response status outside 200..=299          | [`ClientError::Status`]   |
//! | 2xx but the body is not a document         | [`ClientError::Parse`]    |

use std::time::Duration;

use async_trait::async_trait;
use plc_config_core::{decode_document, ConfigDocument};
use serde_json::Value;
use tracing::debug;

use crate::application::transport::{ClientError, ConfigTransport};

/// Path of the configuration resource below the base URL.
pub const CONFIG_PATH: &str = "/api/config";

/// `reqwest`-backed transport for one backend.
#[derive(Debug, Clone)]
pub struct HttpConfigTransport {
    client: reqwest::Client,
    config_url: String,
}

impl HttpConfigTransport {
    /// Creates a transport for the backend at `base_url`
    /// (e.g. `http://127.0.0.1:5000`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Network`] if the HTTP client cannot be built
    /// (e.g. the TLS backend fails to initialise).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let config_url = format!("{}{CONFIG_PATH}", base_url.trim_end_matches('/'));
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Network {
                url: config_url.clone(),
                message: e.to_string(),
            })?;
        Ok(Self { client, config_url })
    }

    /// Full URL of the configuration resource.
    pub fn config_url(&self) -> &str {
        &self.config_url
    }

    fn network_error(&self, err: reqwest::Error) -> ClientError {
        ClientError::Network {
            url: self.config_url.clone(),
            message: err.to_string(),
        }
    }

    /// Turns a non-2xx response into [`ClientError::Status`].
    async fn check_status(
        &self,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        // An unreadable error body leaves the message empty.
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::Status {
            url: self.config_url.clone(),
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl ConfigTransport for HttpConfigTransport {
    async fn fetch_document(&self) -> Result<ConfigDocument, ClientError> {
        debug!("GET {}", self.config_url);
        let response = self
            .client
            .get(&self.config_url)
            .send()
            .await
            .map_err(|e| self.network_error(e))?;
        let response = self.check_status(response).await?;
        let text = response.text().await.map_err(|e| self.network_error(e))?;

        decode_document(&text).map_err(|source| ClientError::Parse {
            url: self.config_url.clone(),
            source,
        })
    }

    async fn store_document(&self, document: &Value) -> Result<(), ClientError> {
        debug!("POST {}", self.config_url);
        let response = self
            .client
            .post(&self.config_url)
            .json(document)
            .send()
            .await
            .map_err(|e| self.network_error(e))?;
        self.check_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn transport_for(server: &mockito::ServerGuard) -> HttpConfigTransport {
        HttpConfigTransport::new(&server.url(), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_config_url_joins_base_without_double_slash() {
        let t =
            HttpConfigTransport::new("http://127.0.0.1:5000/", Duration::from_secs(1)).unwrap();
        assert_eq!(t.config_url(), "http://127.0.0.1:5000/api/config");
    }

    #[tokio::test]
    async fn test_fetch_decodes_document() {
        // Arrange
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/config")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"plc":[{"id":1,"name":"A","ip":"10.0.0.1","tags":[]}]}"#)
            .create_async()
            .await;
        let transport = transport_for(&server);

        // Act
        let doc = transport.fetch_document().await.unwrap();

        // Assert
        mock.assert_async().await;
        assert_eq!(doc.plc[0].name, "A");
        assert!(doc.databases.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_non_success_is_status_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/config")
            .with_status(500)
            .with_body(r#"{"error":"Erro ao carregar"}"#)
            .create_async()
            .await;
        let transport = transport_for(&server);

        let err = transport.fetch_document().await.unwrap_err();

        match err {
            ClientError::Status { status, body, .. } => {
                assert_eq!(status, 500);
                assert!(body.contains("error"));
            }
            other => panic!("expected Status, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_malformed_body_is_parse_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/config")
            .with_status(200)
            .with_body("<html>login</html>")
            .create_async()
            .await;
        let transport = transport_for(&server);

        let err = transport.fetch_document().await.unwrap_err();

        assert!(matches!(err, ClientError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_fetch_unreachable_backend_is_network_error() {
        // Port 1 on loopback is not listening in any sane test environment.
        let transport =
            HttpConfigTransport::new("http://127.0.0.1:1", Duration::from_secs(2)).unwrap();

        let err = transport.fetch_document().await.unwrap_err();

        assert!(matches!(err, ClientError::Network { .. }));
    }

    #[tokio::test]
    async fn test_store_posts_json_body() {
        // Arrange
        let mut server = mockito::Server::new_async().await;
        let doc = json!({"plc": [], "databases": [], "ui": {"navPosition": "top", "themeColor": "#000"}});
        let mock = server
            .mock("POST", "/api/config")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(doc.clone()))
            .with_status(200)
            .with_body(r#"{"status":"success"}"#)
            .create_async()
            .await;
        let transport = transport_for(&server);

        // Act
        transport.store_document(&doc).await.unwrap();

        // Assert
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_store_non_success_is_status_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/config")
            .with_status(403)
            .with_body(r#"{"error":"Permissão negada"}"#)
            .create_async()
            .await;
        let transport = transport_for(&server);

        let err = transport.store_document(&json!({})).await.unwrap_err();

        assert!(matches!(err, ClientError::Status { status: 403, .. }));
    }
}
