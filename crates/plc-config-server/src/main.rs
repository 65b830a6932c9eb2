//! PLC config server entry point.
//!
//! Serves the editor's configuration document at `/api/config` and persists
//! it to a JSON file.
//!
//! # Usage
//!
//! ```text
//! plc-config-server [OPTIONS]
//!
//! Options:
//!   --bind           <ADDR>  IP address to bind [default: 127.0.0.1]
//!   --port           <PORT>  HTTP port [default: 5000]
//!   --data-file      <PATH>  Document file [default: config.json]
//!   --max-body-bytes <N>     Largest accepted POST body [default: 1048576]
//! ```
//!
//! # Environment variable overrides
//!
//! CLI args take precedence when both are present.
//!
//! | Variable               | Default       |
//! |------------------------|---------------|
//! | `PLC_CONFIG_BIND`      | `127.0.0.1`   |
//! | `PLC_CONFIG_PORT`      | `5000`        |
//! | `PLC_CONFIG_DATA_FILE` | `config.json` |
//! | `PLC_CONFIG_MAX_BODY`  | `1048576`     |

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use plc_config_server::domain::config::DEFAULT_MAX_BODY_BYTES;
use plc_config_server::domain::ServerConfig;
use plc_config_server::infrastructure::run_server;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// HTTP backend for the PLC config editor.
#[derive(Debug, Parser)]
#[command(
    name = "plc-config-server",
    about = "Serves and persists the PLC config editor document at /api/config",
    version
)]
struct Cli {
    /// IP address to bind the HTTP server to.
    ///
    /// Use `0.0.0.0` to accept connections from other machines.
    #[arg(long, default_value = "127.0.0.1", env = "PLC_CONFIG_BIND")]
    bind: String,

    /// TCP port for the HTTP server.
    #[arg(long, default_value_t = 5000, env = "PLC_CONFIG_PORT")]
    port: u16,

    /// JSON file the document is persisted to.
    #[arg(long, default_value = "config.json", env = "PLC_CONFIG_DATA_FILE")]
    data_file: PathBuf,

    /// Largest accepted `POST /api/config` body, in bytes.
    #[arg(long, default_value_t = DEFAULT_MAX_BODY_BYTES, env = "PLC_CONFIG_MAX_BODY")]
    max_body_bytes: u64,
}

impl Cli {
    /// Converts the parsed CLI arguments into a [`ServerConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if `--bind` is not a valid IP address.
    fn into_server_config(self) -> anyhow::Result<ServerConfig> {
        let bind_addr: SocketAddr = format!("{}:{}", self.bind, self.port)
            .parse()
            .with_context(|| format!("invalid bind address: '{}:{}'", self.bind, self.port))?;

        Ok(ServerConfig {
            bind_addr,
            data_file: self.data_file,
            max_body_bytes: self.max_body_bytes,
        })
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // `RUST_LOG` controls the level; fall back to `info`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Cli::parse().into_server_config()?;

    info!(
        "PLC config server starting: bind={}, data_file={}",
        config.bind_addr,
        config.data_file.display()
    );

    // Resolves on Ctrl+C; warp then stops accepting and drains open requests.
    let shutdown = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("received Ctrl+C, initiating graceful shutdown"),
            Err(e) => tracing::error!("failed to listen for Ctrl+C signal: {e}"),
        }
    };

    run_server(config, shutdown).await
}

// ── Tests ─────────────────────────────────────────────────────────────────────
