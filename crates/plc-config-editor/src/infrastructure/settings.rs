//! TOML settings file for the editor.
//!
//! Holds the values an operator would otherwise pass on every invocation:
//!
//! ```toml
//! server_url = "http://10.0.0.5:5000"
//! timeout_secs = 10
//!
//! [ui]
//! nav_position = "left"
//! theme_color = "#1e90ff"
//! ```
//!
//! Every field has a serde default, so a partial file (or no file at all)
//! still yields a complete [`EditorSettings`].  Command-line flags override
//! whatever is read here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for settings file operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse settings TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The settings could not be serialized to TOML.
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Editor settings stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorSettings {
    /// Base URL of the backend, without the `/api/config` path.
    #[serde(default = "default_server_url")]
    pub server_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Fallback values for the two UI form fields.
    #[serde(default)]
    pub ui: UiDefaults,
}

/// Fallback values for the `nav-position` and `theme-color` form fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiDefaults {
    #[serde(default = "default_nav_position")]
    pub nav_position: String,
    #[serde(default = "default_theme_color")]
    pub theme_color: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_server_url() -> String {
    "http://127.0.0.1:5000".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_nav_position() -> String {
    "top".to_string()
}
fn default_theme_color() -> String {
    "#000000".to_string()
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            timeout_secs: default_timeout_secs(),
            ui: UiDefaults::default(),
        }
    }
}

impl Default for UiDefaults {
    fn default() -> Self {
        Self {
            nav_position: default_nav_position(),
            theme_color: default_theme_color(),
        }
    }
}

// ── Settings repository ───────────────────────────────────────────────────────

/// Loads settings from `path`, returning [`EditorSettings::default`] if the
/// file does not exist.
///
/// # Errors
///
/// Returns [`SettingsError::Io`] for file-system errors other than "not
/// found", and [`SettingsError::Parse`] if the TOML is malformed.
pub fn load_settings(path: &Path) -> Result<EditorSettings, SettingsError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(EditorSettings::default()),
        Err(source) => Err(SettingsError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Writes `settings` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`SettingsError::Io`] for file-system failures or
/// [`SettingsError::Serialize`] if serialization fails.
pub fn save_settings(path: &Path, settings: &EditorSettings) -> Result<(), SettingsError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|source| SettingsError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(settings)?;
    std::fs::write(path, content).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
