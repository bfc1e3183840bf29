//! Centralized application state management
//!
//! Single source of truth for the side panel and the editor document.

use design_sync_core::{Notice, PanelState, SyncedProject};
use gpui::*;

use crate::editor::EditorDocument;

// ============================================================================
// Application State
// ============================================================================

/// Centralized application state
#[derive(Debug, Clone)]
pub struct AppState {
    // Synced projects panel
    pub panel: PanelState,

    // Host editor
    pub document: EditorDocument,
    /// Filename of the project currently on the canvas
    pub document_name: Option<String>,

    // UI State
    pub active_section: SideSection,
    pub side_panel_collapsed: bool,
}

impl AppState {
    pub fn new(default_prompt: &str) -> Self {
        Self {
            panel: PanelState::new(default_prompt),
            document: EditorDocument::default(),
            document_name: None,
            active_section: SideSection::default(),
            side_panel_collapsed: false,
        }
    }
}

impl Global for AppState {}

// ============================================================================
// Supporting Types
// ============================================================================

/// Section tabs of the side panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SideSection {
    #[default]
    Projects,
    Document,
}

// ============================================================================
// State Actions
// ============================================================================

impl AppState {
    pub fn set_section(&mut self, section: SideSection) {
        self.active_section = section;
        self.side_panel_collapsed = false;
    }

    pub fn toggle_side_panel(&mut self) {
        self.side_panel_collapsed = !self.side_panel_collapsed;
    }

    pub fn projects(&self) -> &[SyncedProject] {
        &self.panel.projects
    }

    pub fn is_busy(&self) -> bool {
        self.panel.is_busy()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.panel.notice.as_ref()
    }

    /// Whether a blocking layer (overlay, dialog or notice) is on screen
    pub fn has_overlay(&self) -> bool {
        self.panel.is_busy() || self.panel.is_modal_open || self.panel.notice.is_some()
    }
}

// ============================================================================
// State Initialization
// ============================================================================

/// Initialize the application state
pub fn init(default_prompt: &str, cx: &mut App) {
    cx.set_global(AppState::new(default_prompt));
    tracing::debug!("Application state initialized");
}
