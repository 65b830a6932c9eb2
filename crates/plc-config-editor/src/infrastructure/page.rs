//! In-memory page model.
//!
//! [`PageStyles`] records the inline style properties of the page elements
//! the theme touches.  The CLI prints it; tests inspect it.

use std::collections::BTreeMap;

use plc_config_core::{ElementId, StyleProperty};

use crate::application::theme_applier::Presentation;

/// Style properties per element, in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageStyles {
    styles: BTreeMap<(ElementId, StyleProperty), String>,
}

impl PageStyles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of one property, if it was ever set.
    pub fn get(&self, element: ElementId, property: StyleProperty) -> Option<&str> {
        self.styles.get(&(element, property)).map(String::as_str)
    }

    /// All set properties, ordered by element then property.
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, StyleProperty, &str)> {
        self.styles
            .iter()
            .map(|((element, property), value)| (*element, *property, value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Renders one element's properties as an inline `style` attribute value,
    /// e.g. `background-color: #111; color: #eee`.
    pub fn inline_style(&self, element: ElementId) -> String {
        self.iter()
            .filter(|(el, _, _)| *el == element)
            .map(|(_, property, value)| format!("{property}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl Presentation for PageStyles {
    fn set_style(&mut self, element: ElementId, property: StyleProperty, value: &str) {
        self.styles.insert((element, property), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get() {
        let mut page = PageStyles::new();

        page.set_style(ElementId::Body, StyleProperty::FontSize, "14px");

        assert_eq!(page.get(ElementId::Body, StyleProperty::FontSize), Some("14px"));
        assert_eq!(page.get(ElementId::MainNav, StyleProperty::FontSize), None);
    }

    #[test]
    fn test_later_value_overwrites_earlier() {
        let mut page = PageStyles::new();

        page.set_style(ElementId::MainNav, StyleProperty::Position, "static");
        page.set_style(ElementId::MainNav, StyleProperty::Position, "fixed");

        assert_eq!(
            page.get(ElementId::MainNav, StyleProperty::Position),
            Some("fixed")
        );
    }

    #[test]
    fn test_inline_style_joins_properties_of_one_element() {
        // Arrange
        let mut page = PageStyles::new();
        page.set_style(ElementId::Body, StyleProperty::Color, "#eee");
        page.set_style(ElementId::Body, StyleProperty::BackgroundColor, "#111");
        page.set_style(ElementId::MainNav, StyleProperty::Position, "fixed");

        // Act
        let style = page.inline_style(ElementId::Body);

        // Assert: BackgroundColor sorts before Color
        assert_eq!(style, "background-color: #111; color: #eee");
    }

    #[test]
    fn test_new_page_is_empty() {
        let page = PageStyles::new();
        assert!(page.is_empty());
        assert_eq!(page.inline_style(ElementId::Body), "");
    }
}
