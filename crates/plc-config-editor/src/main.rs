//! PLC config editor entry point.
//!
//! A command-line front end for the two editor modules.  Each subcommand
//! stands in for one page action:
//!
//! ```text
//! plc-config-editor [OPTIONS] <COMMAND>
//!
//! Commands:
//!   show            Load and print both lists and the theme styles
//!   add-plc         Load, append a PLC record, fill it in, save
//!   add-database    Load, append a database connection, fill it in, save
//!   theme           Load the nav bar / theme settings and print the styles
//!   save-raw        POST an arbitrary JSON file as the whole document
//!   write-settings  Write the effective settings to a TOML file
//!
//! Options:
//!   --server-url    <URL>   Backend base URL
//!   --nav-position  <POS>   Value of the nav-position form field
//!   --theme-color   <COLOR> Value of the theme-color form field
//!   --timeout-secs  <N>     Request timeout
//!   --settings      <FILE>  TOML settings file
//! ```
//!
//! # Where values come from
//!
//! Command-line flags (or their environment variables) win over the settings
//! file, which wins over built-in defaults.  For the two form fields the `ui`
//! section of the loaded document sits between the flag and the settings
//! file, so saving without flags keeps what the backend already had.
//!
//! | Variable              | Flag             |
//! |-----------------------|------------------|
//! | `PLC_CONFIG_URL`      | `--server-url`   |
//! | `PLC_CONFIG_TIMEOUT`  | `--timeout-secs` |
//! | `PLC_CONFIG_SETTINGS` | `--settings`     |

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use plc_config_core::{ElementId, UiSettings};
use plc_config_editor::application::{
    ConfigListManager, ConfigTransport, Renderer, ThemeApplier,
};
use plc_config_editor::infrastructure::settings::{load_settings, save_settings, UiDefaults};
use plc_config_editor::infrastructure::{
    ConsoleRenderer, EditorSettings, HttpConfigTransport, PageStyles,
};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Editor for PLC and database connection records.
#[derive(Debug, Parser)]
#[command(
    name = "plc-config-editor",
    about = "Edits the PLC and database connection lists stored at /api/config",
    version
)]
struct Cli {
    /// Backend base URL, e.g. `http://127.0.0.1:5000`.
    #[arg(long, global = true, env = "PLC_CONFIG_URL")]
    server_url: Option<String>,

    /// Navigation bar position saved with the lists.
    #[arg(long, global = true)]
    nav_position: Option<String>,

    /// Theme colour saved with the lists.
    #[arg(long, global = true)]
    theme_color: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, global = true, env = "PLC_CONFIG_TIMEOUT")]
    timeout_secs: Option<u64>,

    /// TOML settings file; a missing file means built-in defaults.
    #[arg(long, global = true, env = "PLC_CONFIG_SETTINGS")]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load and print both lists and the theme styles.
    Show,

    /// Append a PLC record and save.
    AddPlc {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        ip: String,
        /// Tag name; repeat for several tags.
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Append a database connection and save.
    AddDatabase {
        #[arg(long, default_value = "")]
        name: String,
        /// Database engine, e.g. `sqlite`.
        #[arg(long = "type", default_value = "")]
        kind: String,
        #[arg(long, default_value = "")]
        connection_string: String,
    },

    /// Load the nav bar / theme settings and print the resulting styles.
    Theme,

    /// POST the JSON in FILE as the whole document.
    SaveRaw { file: PathBuf },

    /// Write the effective settings to FILE.
    WriteSettings { file: PathBuf },
}

impl Cli {
    /// Layers the command-line values over the settings file.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file exists but cannot be read.
    fn effective_settings(&self) -> anyhow::Result<EditorSettings> {
        let mut settings = match &self.settings {
            Some(path) => load_settings(path)
                .with_context(|| format!("failed to load settings from {}", path.display()))?,
            None => EditorSettings::default(),
        };
        if let Some(url) = &self.server_url {
            settings.server_url = url.clone();
        }
        if let Some(secs) = self.timeout_secs {
            settings.timeout_secs = secs;
        }
        if let Some(nav) = &self.nav_position {
            settings.ui.nav_position = nav.clone();
        }
        if let Some(color) = &self.theme_color {
            settings.ui.theme_color = color.clone();
        }
        Ok(settings)
    }

    /// Resolves the two form values: flag, then the loaded document's `ui`,
    /// then the settings file.
    fn ui_values(&self, loaded: Option<&UiSettings>, defaults: &UiDefaults) -> UiSettings {
        let pick = |flag: &Option<String>, from_doc: Option<&String>, fallback: &String| {
            flag.clone()
                .or_else(|| from_doc.filter(|v| !v.is_empty()).cloned())
                .unwrap_or_else(|| fallback.clone())
        };
        UiSettings {
            nav_position: pick(
                &self.nav_position,
                loaded.map(|ui| &ui.nav_position),
                &defaults.nav_position,
            ),
            theme_color: pick(
                &self.theme_color,
                loaded.map(|ui| &ui.theme_color),
                &defaults.theme_color,
            ),
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never mix with the printed lists.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = cli.effective_settings()?;
    debug!(?settings, "effective settings");

    let transport: Arc<dyn ConfigTransport> = Arc::new(
        HttpConfigTransport::new(
            &settings.server_url,
            Duration::from_secs(settings.timeout_secs),
        )
        .context("failed to create HTTP client")?,
    );
    let mut renderer = ConsoleRenderer::stdout();

    match &cli.command {
        Command::Show => {
            let mut manager = ConfigListManager::new(Arc::clone(&transport));
            manager
                .load(&mut renderer)
                .await
                .context("failed to load configuration")?;
            print_theme(&ThemeApplier::new(transport)).await?;
        }
        Command::AddPlc { name, ip, tags } => {
            let mut manager = load_manager(transport, &mut renderer).await?;
            let id = manager.add_new_plc(&mut renderer);
            if let Some(record) = manager.plc_mut(id) {
                record.name = name.clone();
                record.ip = ip.clone();
                record.tags = tags.clone();
            }
            manager.render_all(&mut renderer);
            let ui = cli.ui_values(manager.loaded_ui(), &settings.ui);
            manager
                .save_config(&ui, &mut renderer)
                .await
                .context("failed to save configuration")?;
            info!(%id, "PLC added");
        }
        Command::AddDatabase {
            name,
            kind,
            connection_string,
        } => {
            let mut manager = load_manager(transport, &mut renderer).await?;
            let id = manager.add_new_database(&mut renderer);
            if let Some(record) = manager.database_mut(id) {
                record.name = name.clone();
                record.kind = kind.clone();
                record.connection_string = connection_string.clone();
            }
            manager.render_all(&mut renderer);
            let ui = cli.ui_values(manager.loaded_ui(), &settings.ui);
            manager
                .save_config(&ui, &mut renderer)
                .await
                .context("failed to save configuration")?;
            info!(%id, "database connection added");
        }
        Command::Theme => {
            print_theme(&ThemeApplier::new(transport)).await?;
        }
        Command::SaveRaw { file } => {
            let text = std::fs::read_to_string(file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let document: serde_json::Value = serde_json::from_str(&text)
                .with_context(|| format!("{} is not valid JSON", file.display()))?;
            ThemeApplier::new(transport)
                .save_config(&document)
                .await
                .context("failed to save configuration")?;
            println!("ok: {} saved", file.display());
        }
        Command::WriteSettings { file } => {
            save_settings(file, &settings)
                .with_context(|| format!("failed to write settings to {}", file.display()))?;
            println!("ok: settings written to {}", file.display());
        }
    }

    Ok(())
}

/// Loads the lists before an edit.  A failed load aborts the command so the
/// backend's lists are never overwritten with empty ones.
async fn load_manager(
    transport: Arc<dyn ConfigTransport>,
    renderer: &mut dyn Renderer,
) -> anyhow::Result<ConfigListManager> {
    let mut manager = ConfigListManager::new(transport);
    manager
        .load(renderer)
        .await
        .context("failed to load configuration")?;
    Ok(manager)
}

async fn print_theme(applier: &ThemeApplier) -> anyhow::Result<()> {
    let mut page = PageStyles::new();
    applier
        .load_config(&mut page)
        .await
        .context("failed to load theme")?;
    if page.is_empty() {
        println!("theme: no styles configured");
        return Ok(());
    }
    for element in [ElementId::MainNav, ElementId::Body] {
        let style = page.inline_style(element);
        if !style.is_empty() {
            println!("{element} {{ {style} }}");
        }
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_leave_everything_to_settings() {
        let cli = Cli::parse_from(["plc-config-editor", "show"]);

        assert!(cli.server_url.is_none());
        assert!(cli.nav_position.is_none());
        assert!(matches!(cli.command, Command::Show));
    }

    #[test]
    fn test_add_plc_collects_repeated_tags() {
        // Arrange / Act
        let cli = Cli::parse_from([
            "plc-config-editor",
            "add-plc",
            "--name",
            "Press 3",
            "--ip",
            "10.0.0.12",
            "--tag",
            "Pressure",
            "--tag",
            "Cycle",
        ]);

        // Assert
        match cli.command {
            Command::AddPlc { name, ip, tags } => {
                assert_eq!(name, "Press 3");
                assert_eq!(ip, "10.0.0.12");
                assert_eq!(tags, vec!["Pressure", "Cycle"]);
            }
            other => panic!("expected AddPlc, got {other:?}"),
        }
    }

    #[test]
    fn test_add_database_type_flag_maps_to_kind() {
        let cli = Cli::parse_from([
            "plc-config-editor",
            "add-database",
            "--type",
            "postgres",
            "--connection-string",
            "host=db",
        ]);

        match cli.command {
            Command::AddDatabase {
                kind,
                connection_string,
                name,
            } => {
                assert_eq!(kind, "postgres");
                assert_eq!(connection_string, "host=db");
                assert_eq!(name, "");
            }
            other => panic!("expected AddDatabase, got {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_accepted_after_subcommand() {
        let cli = Cli::parse_from([
            "plc-config-editor",
            "show",
            "--server-url",
            "http://10.1.1.1:5000",
        ]);

        assert_eq!(cli.server_url.as_deref(), Some("http://10.1.1.1:5000"));
    }

    #[test]
    fn test_effective_settings_flags_override_file() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("editor.toml");
        std::fs::write(
            &path,
            "server_url = \"http://file:5000\"\ntimeout_secs = 30\n",
        )
        .unwrap();
        let path_arg = path.to_string_lossy().to_string();
        let cli = Cli::parse_from([
            "plc-config-editor",
            "--settings",
            &path_arg,
            "--timeout-secs",
            "4",
            "theme",
        ]);

        // Act
        let settings = cli.effective_settings().unwrap();

        // Assert
        assert_eq!(settings.server_url, "http://file:5000");
        assert_eq!(settings.timeout_secs, 4);
    }

    #[test]
    fn test_ui_values_prefer_flag_then_document_then_settings() {
        let cli = Cli::parse_from(["plc-config-editor", "--theme-color", "#fff", "show"]);
        let loaded = UiSettings {
            nav_position: "left".to_string(),
            theme_color: "#123".to_string(),
        };

        let from_doc = cli.ui_values(Some(&loaded), &UiDefaults::default());
        let from_defaults = cli.ui_values(None, &UiDefaults::default());

        assert_eq!(from_doc.nav_position, "left");
        assert_eq!(from_doc.theme_color, "#fff");
        assert_eq!(from_defaults.nav_position, "top");
    }
}
