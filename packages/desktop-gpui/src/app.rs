//! Main application state and root view
//!
//! AppRoot is the top-level view that contains the section rail, the side
//! panel, the canvas and the blocking overlays.

use gpui::prelude::*;
use gpui::*;

use crate::components::busy_overlay::render_busy_overlay;
use crate::components::sidebar::Sidebar;
use crate::dialogs::generate::{DialogDismissed, GenerateDialog};
use crate::dialogs::notice::render_notice;
use crate::keyboard::{Cancel, OpenGenerateDialog, RefreshProjects, ToggleSidePanel, ToggleTheme};
use crate::panel;
use crate::state::{AppState, SideSection};
use crate::theme::{self, scrim, Theme};
use crate::views::canvas::render_canvas;
use crate::views::document::render_document_section;
use crate::views::projects::ProjectsView;

// ============================================================================
// Root View
// ============================================================================

/// Root view of the application
pub struct AppRoot {
    focus_handle: FocusHandle,
    projects_view: Entity<ProjectsView>,
    /// Live while the AI dialog is open
    generate_dialog: Option<(Entity<GenerateDialog>, Subscription)>,
    _subscriptions: Vec<Subscription>,
}

impl AppRoot {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let focus_handle = cx.focus_handle();
        focus_handle.focus(window, cx);

        let projects_view = cx.new(|cx| ProjectsView::new(cx));

        let subscriptions = vec![
            cx.observe_global::<AppState>(|_this, cx| cx.notify()),
            cx.observe_global::<Theme>(|_this, cx| cx.notify()),
        ];

        // Initial listing on mount
        panel::load_projects(cx);

        Self {
            focus_handle,
            projects_view,
            generate_dialog: None,
            _subscriptions: subscriptions,
        }
    }

    pub fn set_section(&mut self, section: SideSection, cx: &mut Context<Self>) {
        cx.update_global::<AppState, _>(|state, _cx| state.set_section(section));
        cx.notify();
    }

    pub fn toggle_side_panel(&mut self, cx: &mut Context<Self>) {
        cx.update_global::<AppState, _>(|state, _cx| state.toggle_side_panel());
        cx.notify();
    }

    pub fn dismiss_notice(&mut self, cx: &mut Context<Self>) {
        cx.update_global::<AppState, _>(|state, _cx| state.panel.dismiss_notice());
        cx.notify();
    }

    fn close_generate_dialog(&mut self, cx: &mut Context<Self>) {
        // Closing mid-generation would hide the running request
        if cx.global::<AppState>().is_busy() {
            return;
        }
        cx.update_global::<AppState, _>(|state, _cx| state.panel.close_modal());
        self.generate_dialog = None;
        cx.notify();
    }

    // ------------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------------

    fn on_open_generate_dialog(
        &mut self,
        _: &OpenGenerateDialog,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if cx.global::<AppState>().has_overlay() {
            return;
        }
        cx.update_global::<AppState, _>(|state, _cx| state.panel.open_modal());
        cx.notify();
    }

    fn on_refresh_projects(&mut self, _: &RefreshProjects, _window: &mut Window, cx: &mut Context<Self>) {
        if cx.global::<AppState>().is_busy() {
            return;
        }
        panel::load_projects(cx);
    }

    fn on_toggle_side_panel(&mut self, _: &ToggleSidePanel, _window: &mut Window, cx: &mut Context<Self>) {
        self.toggle_side_panel(cx);
    }

    fn on_toggle_theme(&mut self, _: &ToggleTheme, _window: &mut Window, cx: &mut Context<Self>) {
        theme::toggle_theme_mode(cx);
    }

    fn on_cancel(&mut self, _: &Cancel, _window: &mut Window, cx: &mut Context<Self>) {
        let state = cx.global::<AppState>();
        let has_notice = state.notice().is_some();
        let is_modal_open = state.panel.is_modal_open;

        if has_notice {
            self.dismiss_notice(cx);
        } else if is_modal_open {
            self.close_generate_dialog(cx);
        }
    }

    // ------------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------------

    /// Keep the dialog entity in step with the modal flag
    fn sync_generate_dialog(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let state = cx.global::<AppState>();
        let is_open = state.panel.is_modal_open;
        let prompt = state.panel.prompt.clone();

        match (is_open, self.generate_dialog.is_some()) {
            (true, false) => {
                let dialog = cx.new(|cx| GenerateDialog::new(&prompt, cx));
                let subscription = cx.subscribe(&dialog, |this, _dialog, _event: &DialogDismissed, cx| {
                    this.close_generate_dialog(cx);
                });
                dialog.update(cx, |dialog, cx| dialog.focus(window, cx));
                self.generate_dialog = Some((dialog, subscription));
            }
            (false, true) => {
                self.generate_dialog = None;
                self.focus_handle.focus(window, cx);
            }
            _ => {}
        }
    }

    fn render_side_panel(&self, section: SideSection, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();

        let content = match section {
            SideSection::Projects => self.projects_view.clone().into_any_element(),
            SideSection::Document => render_document_section(cx).into_any_element(),
        };

        div()
            .w(px(320.0))
            .h_full()
            .flex_none()
            .border_r_1()
            .border_color(theme.border)
            .child(content)
    }

    fn render_generate_overlay(&self, cx: &mut Context<Self>) -> Option<impl IntoElement> {
        let (dialog, _) = self.generate_dialog.as_ref()?;
        let dialog = dialog.clone();

        Some(
            div()
                .id("generate-overlay")
                .absolute()
                .inset_0()
                .bg(scrim(0.5))
                .flex()
                .items_center()
                .justify_center()
                .on_click(cx.listener(|this, _event, _window, cx| {
                    this.close_generate_dialog(cx);
                }))
                .child(dialog),
        )
    }
}

impl Focusable for AppRoot {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for AppRoot {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        self.sync_generate_dialog(window, cx);

        let theme = cx.global::<Theme>().clone();
        let state = cx.global::<AppState>();
        let section = state.active_section;
        let collapsed = state.side_panel_collapsed;
        let notice = state.notice().cloned();
        let is_busy = state.is_busy();

        let mut root = div()
            .key_context("DesignSync")
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::on_open_generate_dialog))
            .on_action(cx.listener(Self::on_refresh_projects))
            .on_action(cx.listener(Self::on_toggle_side_panel))
            .on_action(cx.listener(Self::on_toggle_theme))
            .on_action(cx.listener(Self::on_cancel))
            .relative()
            .flex()
            .flex_row()
            .size_full()
            .bg(theme.background)
            .text_color(theme.text)
            .child(Sidebar::render_inline(section, collapsed, cx));

        if !collapsed {
            root = root.child(self.render_side_panel(section, cx));
        }
        root = root.child(render_canvas(cx));

        if let Some(overlay) = self.render_generate_overlay(cx) {
            root = root.child(overlay);
        }

        if let Some(notice) = notice {
            root = root.child(render_notice(&notice, cx));
        }

        // The busy overlay sits above everything else
        if is_busy {
            root = root.child(render_busy_overlay(cx));
        }

        root
    }
}
