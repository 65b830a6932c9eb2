//! Domain layer for plc-config-server.
//!
//! Plain configuration types with no I/O.  The binary fills them from CLI
//! arguments and environment variables; tests build them directly.

pub mod config;

pub use config::ServerConfig;
