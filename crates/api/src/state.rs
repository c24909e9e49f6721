use std::sync::Arc;

use postboard_db::RecordStore;

use crate::config::ServerConfig;
use crate::templates::Templates;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (everything is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Accessor for the visitor counter and post collection records.
    pub store: Arc<dyn RecordStore>,
    /// Server configuration (shared secret, platform identity).
    pub config: Arc<ServerConfig>,
    /// Page templates loaded at startup.
    pub templates: Arc<Templates>,
}

impl AppState {
    pub fn store(&self) -> &dyn RecordStore {
        self.store.as_ref()
    }
}
