//! ConfigListManager: the PLC and database connection lists.
//!
//! The manager is an explicit state container.  Whoever drives the UI owns it
//! and passes the [`Renderer`] into every call that changes what is shown, so
//! there is no global list and no hidden coupling between the lists and the
//! output.
//!
//! # Lifecycle (one editing session)
//!
//! ```text
//! load()  ──►  add_new_plc() / add_new_database() / plc_mut() …  ──►  save_config()
//!   │                 │                                                  │
//! render_all     render one list                               notify Saved / SaveFailed
//! ```
//!
//! Loading replaces both lists with the backend's; a missing `plc` or
//! `databases` key loads as an empty list.  Saving sends both lists, in order,
//! plus the two UI form values, and nothing else.

use std::sync::Arc;

use plc_config_core::{
    document_to_value, ConfigDocument, DatabaseConnection, PlcRecord, RecordId,
    RecordIdGenerator, UiSettings,
};
use tracing::{debug, info, warn};

use crate::application::transport::{ClientError, ConfigTransport};

/// User-visible outcome of a load or save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The lists were loaded from the backend.
    Loaded { plc: usize, databases: usize },
    /// The document was saved.
    Saved,
    /// Loading failed; the lists are unchanged.
    LoadFailed(String),
    /// Saving failed; nothing was persisted.
    SaveFailed(String),
}

/// Output side of the editor: draws the lists and shows notices.
#[cfg_attr(test, mockall::automock)]
pub trait Renderer: Send {
    /// Redraws the PLC list.
    fn render_plc_list(&mut self, plc: &[PlcRecord]);

    /// Redraws the database connection list.
    fn render_database_connections(&mut self, databases: &[DatabaseConnection]);

    /// Shows the outcome of a load or save to the user.
    fn notify(&mut self, notice: &Notice);
}

/// The editor's two record lists.
pub struct ConfigListManager {
    transport: Arc<dyn ConfigTransport>,
    ids: RecordIdGenerator,
    plc_list: Vec<PlcRecord>,
    database_connections: Vec<DatabaseConnection>,
    /// `ui` section of the last loaded document, if it had one.
    loaded_ui: Option<UiSettings>,
}

impl ConfigListManager {
    /// Creates a manager with empty lists and a system-clock id generator.
    pub fn new(transport: Arc<dyn ConfigTransport>) -> Self {
        Self::with_id_generator(transport, RecordIdGenerator::new())
    }

    /// Creates a manager with a custom id generator.
    pub fn with_id_generator(transport: Arc<dyn ConfigTransport>, ids: RecordIdGenerator) -> Self {
        Self {
            transport,
            ids,
            plc_list: Vec::new(),
            database_connections: Vec::new(),
            loaded_ui: None,
        }
    }

    pub fn plc_list(&self) -> &[PlcRecord] {
        &self.plc_list
    }

    pub fn database_connections(&self) -> &[DatabaseConnection] {
        &self.database_connections
    }

    /// UI form values stored with the last loaded document.
    pub fn loaded_ui(&self) -> Option<&UiSettings> {
        self.loaded_ui.as_ref()
    }

    /// Mutable access to one PLC record, for form edits.
    pub fn plc_mut(&mut self, id: RecordId) -> Option<&mut PlcRecord> {
        self.plc_list.iter_mut().find(|p| p.id == id)
    }

    /// Mutable access to one database connection, for form edits.
    pub fn database_mut(&mut self, id: RecordId) -> Option<&mut DatabaseConnection> {
        self.database_connections.iter_mut().find(|d| d.id == id)
    }

    /// Appends an empty PLC record with a fresh id and redraws the PLC list.
    pub fn add_new_plc(&mut self, renderer: &mut dyn Renderer) -> RecordId {
        let id = self.ids.next_id();
        self.plc_list.push(PlcRecord::empty(id));
        debug!("added PLC record {id}");
        renderer.render_plc_list(&self.plc_list);
        id
    }

    /// Appends an empty database connection with a fresh id and redraws the
    /// database list.
    pub fn add_new_database(&mut self, renderer: &mut dyn Renderer) -> RecordId {
        let id = self.ids.next_id();
        self.database_connections.push(DatabaseConnection::empty(id));
        debug!("added database connection {id}");
        renderer.render_database_connections(&self.database_connections);
        id
    }

    /// Redraws both lists.
    pub fn render_all(&self, renderer: &mut dyn Renderer) {
        renderer.render_plc_list(&self.plc_list);
        renderer.render_database_connections(&self.database_connections);
    }

    /// The document [`save_config`](Self::save_config) sends for `ui`.
    pub fn build_document(&self, ui: &UiSettings) -> ConfigDocument {
        ConfigDocument::from_lists(
            self.plc_list.clone(),
            self.database_connections.clone(),
            ui.clone(),
        )
    }

    /// Saves both lists plus the UI form values.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`ClientError`], or [`ClientError::Encode`] if
    /// the document cannot be serialized.  The renderer is notified either
    /// way.
    pub async fn save_config(
        &self,
        ui: &UiSettings,
        renderer: &mut dyn Renderer,
    ) -> Result<(), ClientError> {
        let result = self.send_document(ui).await;
        match &result {
            Ok(()) => {
                info!(
                    plc = self.plc_list.len(),
                    databases = self.database_connections.len(),
                    "configuration saved"
                );
                renderer.notify(&Notice::Saved);
            }
            Err(e) => {
                warn!("saving configuration failed: {e}");
                renderer.notify(&Notice::SaveFailed(format!("{}: {e}", e.kind())));
            }
        }
        result
    }

    async fn send_document(&self, ui: &UiSettings) -> Result<(), ClientError> {
        let value = document_to_value(&self.build_document(ui)).map_err(ClientError::Encode)?;
        self.transport.store_document(&value).await
    }

    /// Loads both lists from the backend and redraws them.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`ClientError`]; the lists are left unchanged
    /// and the renderer is notified.
    pub async fn load(&mut self, renderer: &mut dyn Renderer) -> Result<(), ClientError> {
        match self.transport.fetch_document().await {
            Ok(document) => {
                self.replace_lists(document);
                info!(
                    plc = self.plc_list.len(),
                    databases = self.database_connections.len(),
                    "configuration loaded"
                );
                renderer.notify(&Notice::Loaded {
                    plc: self.plc_list.len(),
                    databases: self.database_connections.len(),
                });
                self.render_all(renderer);
                Ok(())
            }
            Err(e) => {
                warn!("loading configuration failed: {e}");
                renderer.notify(&Notice::LoadFailed(format!("{}: {e}", e.kind())));
                Err(e)
            }
        }
    }

    /// Replaces both lists with the ones in `document`.
    pub fn replace_lists(&mut self, document: ConfigDocument) {
        self.plc_list = document.plc;
        self.database_connections = document.databases;
        self.loaded_ui = document.ui;
    }
}
