//! Panel state
//!
//! The explicit state of the synced projects panel. The UI owns one instance
//! and mutates it only through the setters below.

use crate::filter::filter_projects;
use crate::types::{Notice, SyncedProject};

/// Prompt shown in the AI dialog when nothing is configured.
pub const DEFAULT_PROMPT: &str = "Fais une présentation sur le bac de Français";

/// State of the synced projects panel
#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    /// Last successful listing, filtered by the term captured at fetch time
    pub projects: Vec<SyncedProject>,
    pub search_term: String,
    pub is_modal_open: bool,
    pub prompt: String,
    /// Busy flag gating the full-window overlay
    pub show_spinner: bool,
    /// Workflows currently in flight; `show_spinner` mirrors `busy_count > 0`
    busy_count: usize,
    /// Pending user-facing alert
    pub notice: Option<Notice>,
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new(DEFAULT_PROMPT)
    }
}

impl PanelState {
    pub fn new(prompt: &str) -> Self {
        Self {
            projects: Vec::new(),
            search_term: String::new(),
            is_modal_open: false,
            prompt: prompt.to_string(),
            show_spinner: false,
            busy_count: 0,
            notice: None,
        }
    }

    /// Replace the project list with the matches of `term` in `fetched`.
    pub fn apply_listing(&mut self, fetched: &[SyncedProject], term: &str) {
        self.projects = filter_projects(fetched, term);
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    /// A workflow started. Pair every call with [`PanelState::end_busy`].
    pub fn begin_busy(&mut self) {
        self.busy_count += 1;
        self.show_spinner = true;
    }

    /// A workflow finished. The flag drops once none is left in flight.
    pub fn end_busy(&mut self) {
        self.busy_count = self.busy_count.saturating_sub(1);
        self.show_spinner = self.busy_count > 0;
    }

    pub fn is_busy(&self) -> bool {
        self.show_spinner
    }

    pub fn open_modal(&mut self) {
        self.is_modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.is_modal_open = false;
    }

    pub fn set_prompt(&mut self, prompt: &str) {
        self.prompt = prompt.to_string();
    }

    pub fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
