//! Server configuration types.
//!
//! [`ServerConfig`] is the single source of truth for all runtime settings.
//! It is built from CLI arguments in `main.rs` or from [`Default`] in tests.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Default request body limit: 1 MiB.
pub const DEFAULT_MAX_BODY_BYTES: u64 = 1024 * 1024;

/// All runtime configuration for the config server.
///
/// # Example
///
/// ```rust
/// use plc_config_server::domain::ServerConfig;
///
/// let cfg = ServerConfig::default();
/// assert_eq!(cfg.bind_addr.port(), 5000);
/// ```
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address and port the HTTP server binds to.
    ///
    /// Port `0` asks the OS for a free port; the bound address is reported
    /// by [`crate::infrastructure::bind_server`].
    pub bind_addr: SocketAddr,

    /// JSON file holding the persisted document.
    pub data_file: PathBuf,

    /// Largest accepted `POST /api/config` body, in bytes.
    pub max_body_bytes: u64,
}

impl Default for ServerConfig {
    /// | Field          | Default            |
    /// |----------------|--------------------|
    /// | bind_addr      | `127.0.0.1:5000`   |
    /// | data_file      | `config.json`      |
    /// | max_body_bytes | 1 MiB              |
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            data_file: PathBuf::from("config.json"),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
