//! Theme settings and the presentation properties they control.
//!
//! The configuration document may carry two optional styling sections:
//!
//! ```json
//! {
//!   "navBar": { "position": "fixed", "backgroundColor": "#222" },
//!   "theme":  { "backgroundColor": "#111", "textColor": "#eee", "fontSize": 14 }
//! }
//! ```
//!
//! [`ThemeConfig::style_assignments`] converts these settings into a flat,
//! ordered list of [`StyleAssignment`]s that a presentation layer applies one
//! by one.  Settings that are absent produce no assignment at all, so the
//! corresponding property keeps whatever value it had before.  There is no
//! reset-to-default behaviour.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::lenient;

/// Styling of the main navigation bar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavBarStyle {
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub position: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub background_color: Option<String>,
}

/// Page-wide colours and font size.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeStyle {
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub background_color: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub text_color: Option<String>,
    /// Font size in pixels; `"14"` is read as `14`.
    #[serde(
        default,
        deserialize_with = "lenient::pixels",
        skip_serializing_if = "Option::is_none"
    )]
    pub font_size: Option<f64>,
}

/// The styling part of a configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(rename = "navBar", default, skip_serializing_if = "Option::is_none")]
    pub nav_bar: Option<NavBarStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeStyle>,
}

/// Page elements the theme can style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementId {
    /// The navigation bar, element id `main-nav`.
    MainNav,
    /// The page body.
    Body,
}

impl ElementId {
    /// The element identifier used by the page markup.
    pub fn as_str(self) -> &'static str {
        match self {
            ElementId::MainNav => "main-nav",
            ElementId::Body => "body",
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Style properties the theme can set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleProperty {
    Position,
    BackgroundColor,
    Color,
    FontSize,
}

impl StyleProperty {
    /// CSS property name.
    pub fn css_name(self) -> &'static str {
        match self {
            StyleProperty::Position => "position",
            StyleProperty::BackgroundColor => "background-color",
            StyleProperty::Color => "color",
            StyleProperty::FontSize => "font-size",
        }
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

/// One "set this property on this element" instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleAssignment {
    pub element: ElementId,
    pub property: StyleProperty,
    pub value: String,
}

impl StyleAssignment {
    fn new(element: ElementId, property: StyleProperty, value: impl Into<String>) -> Self {
        Self {
            element,
            property,
            value: value.into(),
        }
    }
}

impl ThemeConfig {
    /// Returns `true` when neither section is present.
    pub fn is_empty(&self) -> bool {
        self.nav_bar.is_none() && self.theme.is_none()
    }

    /// Converts the settings into the ordered list of style assignments.
    ///
    /// Order: nav bar position, nav bar background, body background, body
    /// text colour, body font size.  The font size is suffixed with `px`.
    pub fn style_assignments(&self) -> Vec<StyleAssignment> {
        let mut out = Vec::new();

        if let Some(nav) = &self.nav_bar {
            if let Some(position) = &nav.position {
                out.push(StyleAssignment::new(
                    ElementId::MainNav,
                    StyleProperty::Position,
                    position.as_str(),
                ));
            }
            if let Some(color) = &nav.background_color {
                out.push(StyleAssignment::new(
                    ElementId::MainNav,
                    StyleProperty::BackgroundColor,
                    color.as_str(),
                ));
            }
        }

        if let Some(theme) = &self.theme {
            if let Some(color) = &theme.background_color {
                out.push(StyleAssignment::new(
                    ElementId::Body,
                    StyleProperty::BackgroundColor,
                    color.as_str(),
                ));
            }
            if let Some(color) = &theme.text_color {
                out.push(StyleAssignment::new(
                    ElementId::Body,
                    StyleProperty::Color,
                    color.as_str(),
                ));
            }
            if let Some(size) = theme.font_size {
                out.push(StyleAssignment::new(
                    ElementId::Body,
                    StyleProperty::FontSize,
                    px(size),
                ));
            }
        }

        out
    }
}

/// Formats a pixel length; whole numbers print without a fraction (`14px`).
fn px(size: f64) -> String {
    format!("{size}px")
}
