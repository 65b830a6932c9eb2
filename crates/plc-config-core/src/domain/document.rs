//! The configuration document: the unit of exchange with `/api/config`.
//!
//! Every save transmits the complete document; there are no partial updates.
//!
//! # One schema for both consumers
//!
//! The editor's list manager reads and writes `plc`, `databases` and `ui`.
//! The theme applier reads `navBar` and `theme`.  Both live in the same
//! document type so a single loader serves both.  `ui.navPosition` /
//! `ui.themeColor` and `navBar` / `theme` are kept as separate keys: nothing
//! here assumes they describe the same data.
//!
//! Top-level keys this crate does not know about are kept in
//! [`ConfigDocument::extra`] and written back unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::lenient;
use crate::domain::records::{DatabaseConnection, PlcRecord};
use crate::domain::theme::{NavBarStyle, ThemeConfig, ThemeStyle};

/// Values of the two UI form fields saved with the lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiSettings {
    /// Position of the navigation bar, from the `nav-position` field.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub nav_position: String,
    /// Theme colour, from the `theme-color` field.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub theme_color: String,
}

/// The full configuration document.
///
/// Decoding is section by section: a missing, `null` or malformed `plc` /
/// `databases` loads as an empty list (bad entries are dropped one by one),
/// and a malformed `ui`, `navBar` or `theme` section loads as absent.  A bad
/// section never hides the others.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    #[serde(default, deserialize_with = "lenient::list")]
    pub plc: Vec<PlcRecord>,

    #[serde(default, deserialize_with = "lenient::list")]
    pub databases: Vec<DatabaseConnection>,

    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub ui: Option<UiSettings>,

    #[serde(
        rename = "navBar",
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub nav_bar: Option<NavBarStyle>,

    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub theme: Option<ThemeStyle>,

    /// Unknown top-level keys, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ConfigDocument {
    /// Builds the document the list manager saves: both lists plus the UI
    /// form values, and nothing else.
    pub fn from_lists(
        plc: Vec<PlcRecord>,
        databases: Vec<DatabaseConnection>,
        ui: UiSettings,
    ) -> Self {
        Self {
            plc,
            databases,
            ui: Some(ui),
            ..Self::default()
        }
    }

    /// Extracts the styling sections.
    pub fn theme_config(&self) -> ThemeConfig {
        ThemeConfig {
            nav_bar: self.nav_bar.clone(),
            theme: self.theme.clone(),
        }
    }
}
