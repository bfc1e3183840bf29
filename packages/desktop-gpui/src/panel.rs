//! Launches the synced projects workflows from the UI
//!
//! Each call spawns a foreground task that drives a core workflow against
//! the runtime-bridged services and the GPUI host. Errors are already logged
//! and surfaced as notices by the workflows themselves.

use design_sync_core::{workflow, SyncedProject};
use gpui::*;

use crate::api;
use crate::host::GpuiHost;
use crate::state::AppState;

/// Reload the list with the current search term
pub fn load_projects(cx: &mut App) {
    let services = api::services(cx);

    cx.spawn(async move |cx| {
        let mut host = GpuiHost::new(cx);
        workflow::load_projects(&services, &mut host).await;
    })
    .detach();
}

/// Store a new search term and reload the list
pub fn search(term: String, cx: &mut App) {
    let services = api::services(cx);

    cx.spawn(async move |cx| {
        let mut host = GpuiHost::new(cx);
        workflow::search(&services, &mut host, &term).await;
    })
    .detach();
}

/// Download a project into the editor
pub fn open_project(project: SyncedProject, cx: &mut App) {
    let services = api::services(cx);

    cx.spawn(async move |cx| {
        let mut host = GpuiHost::for_document(cx, &project.filename);
        let _ = workflow::open_project(&services, &mut host, &project).await;
    })
    .detach();
}

/// Generate a project from the prompt currently in the dialog
pub fn create_with_ai(cx: &mut App) {
    let services = api::services(cx);
    let prompt = cx.global::<AppState>().panel.prompt.clone();

    // Busy from the click on, not from the task's first poll, so a second
    // submit in between is rejected by the dialog
    cx.update_global::<AppState, _>(|state, _cx| state.panel.begin_busy());

    cx.spawn(async move |cx| {
        let created = {
            let mut host = GpuiHost::new(cx);
            workflow::create_with_ai(&services, &services, &mut host, &prompt).await
        };

        let _ = cx.update(|cx| {
            cx.update_global::<AppState, _>(|state, _cx| {
                state.panel.end_busy();
                // The canvas shows the generated design under its saved filename
                if let Ok(project) = created {
                    state.document_name = Some(project.filename);
                }
            });
        });
    })
    .detach();
}
