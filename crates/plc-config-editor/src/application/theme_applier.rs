//! ThemeApplier: loads the nav bar / theme settings and applies them.
//!
//! Applying is a one-shot transformation: each [`StyleAssignment`] produced by
//! [`ThemeConfig::style_assignments`] becomes one
//! [`Presentation::set_style`] call.  Settings absent from the document are
//! skipped, so properties set earlier keep their values.
//!
//! The applier also exposes the generic save: any caller-supplied JSON
//! document is posted as-is.

use std::sync::Arc;

use plc_config_core::{ElementId, StyleProperty, ThemeConfig};
use serde_json::Value;
use tracing::{debug, info};

use crate::application::transport::{ClientError, ConfigTransport};

/// Something whose style properties can be set: a page, a widget tree, a
/// test double.
pub trait Presentation: Send {
    fn set_style(&mut self, element: ElementId, property: StyleProperty, value: &str);
}

/// Use case for loading, applying and saving the theme.
pub struct ThemeApplier {
    transport: Arc<dyn ConfigTransport>,
}

impl ThemeApplier {
    pub fn new(transport: Arc<dyn ConfigTransport>) -> Self {
        Self { transport }
    }

    /// Fetches the document and applies its theme settings to `page`.
    ///
    /// Returns the applied settings.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`ClientError`]; `page` is left untouched.
    pub async fn load_config(
        &self,
        page: &mut dyn Presentation,
    ) -> Result<ThemeConfig, ClientError> {
        let document = self.transport.fetch_document().await?;
        let config = document.theme_config();
        let applied = self.apply_config(&config, page);
        info!("theme loaded, {applied} style properties applied");
        Ok(config)
    }

    /// Applies `config` to `page` and returns how many properties were set.
    pub fn apply_config(&self, config: &ThemeConfig, page: &mut dyn Presentation) -> usize {
        let assignments = config.style_assignments();
        for a in &assignments {
            debug!("{} {} = {}", a.element, a.property, a.value);
            page.set_style(a.element, a.property, &a.value);
        }
        assignments.len()
    }

    /// Posts `document` unchanged.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`ClientError`].
    pub async fn save_config(&self, document: &Value) -> Result<(), ClientError> {
        self.transport.store_document(document).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use plc_config_core::{decode_document, ConfigDocument, NavBarStyle, ThemeStyle};
    use serde_json::json;
    use std::sync::Mutex;

    // ── Test doubles ──────────────────────────────────────────────────────────

    #[derive(Default)]
    struct RecordingPage {
        calls: Vec<(ElementId, StyleProperty, String)>,
    }

    impl Presentation for RecordingPage {
        fn set_style(&mut self, element: ElementId, property: StyleProperty, value: &str) {
            self.calls.push((element, property, value.to_string()));
        }
    }

    struct FixedTransport {
        document: Result<ConfigDocument, u16>,
        stored: Mutex<Vec<Value>>,
    }

    impl FixedTransport {
        fn serving(json: &str) -> Self {
            Self {
                document: Ok(decode_document(json).unwrap()),
                stored: Mutex::new(Vec::new()),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                document: Err(status),
                stored: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ConfigTransport for FixedTransport {
        async fn fetch_document(&self) -> Result<ConfigDocument, ClientError> {
            self.document.clone().map_err(|status| ClientError::Status {
                url: "http://test/api/config".to_string(),
                status,
                body: String::new(),
            })
        }

        async fn store_document(&self, document: &Value) -> Result<(), ClientError> {
            self.stored.lock().unwrap().push(document.clone());
            Ok(())
        }
    }

    fn applier(transport: FixedTransport) -> (ThemeApplier, Arc<FixedTransport>) {
        let transport = Arc::new(transport);
        (ThemeApplier::new(Arc::clone(&transport) as Arc<dyn ConfigTransport>), transport)
    }

    #[test]
    fn test_apply_empty_config_changes_nothing() {
        let (applier, _) = applier(FixedTransport::serving("{}"));
        let mut page = RecordingPage::default();

        let applied = applier.apply_config(&ThemeConfig::default(), &mut page);

        assert_eq!(applied, 0);
        assert!(page.calls.is_empty());
    }

    #[test]
    fn test_apply_theme_sets_body_properties() {
        // Arrange
        let (applier, _) = applier(FixedTransport::serving("{}"));
        let mut page = RecordingPage::default();
        let config = ThemeConfig {
            nav_bar: None,
            theme: Some(ThemeStyle {
                background_color: Some("#111".to_string()),
                text_color: Some("#eee".to_string()),
                font_size: Some(14.0),
            }),
        };

        // Act
        applier.apply_config(&config, &mut page);

        // Assert
        assert_eq!(
            page.calls,
            vec![
                (ElementId::Body, StyleProperty::BackgroundColor, "#111".to_string()),
                (ElementId::Body, StyleProperty::Color, "#eee".to_string()),
                (ElementId::Body, StyleProperty::FontSize, "14px".to_string()),
            ]
        );
    }

    #[test]
    fn test_apply_nav_bar_sets_main_nav_properties() {
        let (applier, _) = applier(FixedTransport::serving("{}"));
        let mut page = RecordingPage::default();
        let config = ThemeConfig {
            nav_bar: Some(NavBarStyle {
                position: Some("sticky".to_string()),
                background_color: Some("#333".to_string()),
            }),
            theme: None,
        };

        applier.apply_config(&config, &mut page);

        assert!(page.calls.iter().all(|(el, _, _)| *el == ElementId::MainNav));
        assert_eq!(page.calls.len(), 2);
    }

    #[tokio::test]
    async fn test_load_config_applies_document_theme() {
        // Arrange
        let (applier, _) = applier(FixedTransport::serving(
            r##"{"plc":[],"navBar":{"position":"fixed"},"theme":{"fontSize":16}}"##,
        ));
        let mut page = RecordingPage::default();

        // Act
        let config = applier.load_config(&mut page).await.unwrap();

        // Assert
        assert!(config.nav_bar.is_some());
        assert_eq!(
            page.calls,
            vec![
                (ElementId::MainNav, StyleProperty::Position, "fixed".to_string()),
                (ElementId::Body, StyleProperty::FontSize, "16px".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_load_config_ignores_ui_section() {
        // `ui.themeColor` is list-manager data, not a theme setting.
        let (applier, _) = applier(FixedTransport::serving(
            r##"{"ui":{"navPosition":"left","themeColor":"#123"}}"##,
        ));
        let mut page = RecordingPage::default();

        applier.load_config(&mut page).await.unwrap();

        assert!(page.calls.is_empty());
    }

    #[tokio::test]
    async fn test_load_config_failure_leaves_page_untouched() {
        let (applier, _) = applier(FixedTransport::failing(404));
        let mut page = RecordingPage::default();

        let result = applier.load_config(&mut page).await;

        assert!(matches!(result, Err(ClientError::Status { status: 404, .. })));
        assert!(page.calls.is_empty());
    }

    #[tokio::test]
    async fn test_load_config_runs_on_a_spawned_task() {
        // Arrange
        let (applier, _) = applier(FixedTransport::serving(r#"{"theme":{"fontSize":12}}"#));

        // Act
        let handle = tokio::spawn(async move {
            let mut page = RecordingPage::default();
            applier.load_config(&mut page).await.map(|_| page.calls)
        });
        let calls = handle.await.unwrap().unwrap();

        // Assert
        assert_eq!(
            calls,
            vec![(ElementId::Body, StyleProperty::FontSize, "12px".to_string())]
        );
    }

    #[test]
    fn test_save_config_posts_document_unchanged() {
        let (applier, transport) = applier(FixedTransport::serving("{}"));
        let doc = json!({"navBar": {"position": "top"}, "custom": [1, 2, 3]});

        tokio_test::block_on(applier.save_config(&doc)).unwrap();

        assert_eq!(*transport.stored.lock().unwrap(), vec![doc]);
    }
}
