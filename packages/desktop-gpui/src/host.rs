//! Panel host backed by the GPUI application state
//!
//! Lets the core workflows update [`AppState`] and the editor document from
//! a foreground task.

use design_sync_core::{Error, Notice, PanelHost, PanelState, Result};
use gpui::*;
use serde_json::Value;

use crate::state::AppState;

/// [`PanelHost`] over an async GPUI context
pub struct GpuiHost<'a> {
    cx: &'a mut AsyncApp,
    /// Filename recorded as the canvas title after a successful load
    document_name: Option<String>,
}

impl<'a> GpuiHost<'a> {
    pub fn new(cx: &'a mut AsyncApp) -> Self {
        Self {
            cx,
            document_name: None,
        }
    }

    /// Name the next loaded document after a project file
    pub fn for_document(cx: &'a mut AsyncApp, name: &str) -> Self {
        Self {
            cx,
            document_name: Some(name.to_string()),
        }
    }

    fn with_state(&mut self, f: impl FnOnce(&mut AppState)) {
        let _ = self.cx.update(|cx| {
            cx.update_global::<AppState, _>(|state, _cx| f(state));
        });
    }
}

impl PanelHost for GpuiHost<'_> {
    fn update_panel(&mut self, f: impl FnOnce(&mut PanelState)) {
        self.with_state(|state| f(&mut state.panel));
    }

    fn search_term(&mut self) -> String {
        let mut term = String::new();
        let _ = self.cx.update(|cx| {
            term = cx.global::<AppState>().panel.search_term.clone();
        });
        term
    }

    fn load_document(&mut self, document: Value) -> Result<()> {
        let name = self.document_name.clone();
        let mut result = Err(Error::InvalidDocument("editor is not available".to_string()));
        self.with_state(|state| {
            result = state.document.load_json(document);
            if result.is_ok() {
                state.document_name = name;
            }
        });
        result
    }

    fn notify(&mut self, notice: Notice) {
        self.with_state(|state| state.panel.show_notice(notice));
    }
}
