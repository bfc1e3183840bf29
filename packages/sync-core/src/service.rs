//! Seams between the panel workflows and the outside world.
//!
//! The sync backend and the generation backend are reached through async
//! traits so the desktop app can bridge them onto its own runtime. The host
//! editor and the UI state sit behind [`PanelHost`].

use async_trait::async_trait;
use serde_json::Value;

use crate::state::PanelState;
use crate::types::{Notice, SyncedProject};
use crate::Result;

/// Backend holding the synced project files.
#[async_trait]
pub trait ProjectSource: Send + Sync {
    /// Every synced project, fully materialized.
    async fn list_projects(&self) -> Result<Vec<SyncedProject>>;

    /// Download the document payload stored at `url`.
    async fn fetch_document(&self, url: &str) -> Result<Value>;

    /// Persist `document` as a new synced project.
    async fn upload_project(&self, filename: &str, document: &Value) -> Result<SyncedProject>;
}

/// Backend turning a free-text prompt into a design document.
#[async_trait]
pub trait DocumentGenerator: Send + Sync {
    async fn generate_document(&self, prompt: &str) -> Result<Value>;
}

/// The UI side of a workflow: panel state, host editor and alerts.
pub trait PanelHost {
    fn update_panel(&mut self, f: impl FnOnce(&mut PanelState));

    /// Current search term of the panel.
    fn search_term(&mut self) -> String;

    /// Replace the editor's active design. Must leave it untouched on error.
    fn load_document(&mut self, document: Value) -> Result<()>;

    fn notify(&mut self, notice: Notice);
}
