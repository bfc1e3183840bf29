//! Synced projects panel
//!
//! Lists the synced projects matching the search box, opens one on click and
//! offers the "Create with AI" entry point.

use gpui::prelude::*;
use gpui::*;

use crate::components::text_input::{InputChanged, TextInput};
use crate::i18n::I18n;
use crate::keyboard::OpenGenerateDialog;
use crate::panel;
use crate::state::AppState;
use crate::theme::Theme;

/// Synced projects panel view
pub struct ProjectsView {
    search_input: Entity<TextInput>,
    _subscriptions: Vec<Subscription>,
}

impl ProjectsView {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let placeholder = cx.global::<I18n>().t("projects.search_placeholder");
        let search_input = cx.new(|cx| TextInput::new(&placeholder, cx).with_icon("⌕"));

        let subscriptions = vec![
            // Every edit re-runs the listing with the new term
            cx.subscribe(&search_input, |_this, _input, event: &InputChanged, cx| {
                panel::search(event.text.clone(), cx);
            }),
            cx.observe_global::<AppState>(|_this, cx| cx.notify()),
        ];

        Self {
            search_input,
            _subscriptions: subscriptions,
        }
    }

    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();
        let i18n = cx.global::<I18n>();

        div()
            .flex()
            .flex_col()
            .gap(px(12.0))
            .mb(px(16.0))
            .child(
                div()
                    .id("create-with-ai-btn")
                    .w_full()
                    .px(px(12.0))
                    .py(px(8.0))
                    .rounded(px(6.0))
                    .bg(theme.success)
                    .text_color(theme.text_on_accent)
                    .font_weight(FontWeight::MEDIUM)
                    .flex()
                    .items_center()
                    .justify_center()
                    .gap(px(6.0))
                    .cursor_pointer()
                    .hover(|s| s.opacity(0.9))
                    .on_click(|_event, window, cx| {
                        window.dispatch_action(Box::new(OpenGenerateDialog), cx);
                    })
                    .child(i18n.t("ai.button"))
                    .child("✦"),
            )
            .child(self.search_input.clone())
    }

    fn render_projects_list(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let state = cx.global::<AppState>();
        let theme = cx.global::<Theme>();
        let i18n = cx.global::<I18n>();
        let projects = state.projects();

        if projects.is_empty() {
            return div()
                .flex_1()
                .flex()
                .flex_col()
                .items_center()
                .justify_center()
                .gap(px(8.0))
                .child(
                    div()
                        .text_lg()
                        .text_color(theme.text_muted)
                        .child(i18n.t("projects.empty_title")),
                )
                .child(
                    div()
                        .text_sm()
                        .text_color(theme.text_muted)
                        .child(i18n.t("projects.empty_subtitle")),
                )
                .into_any_element();
        }

        let count = projects.len().to_string();

        div()
            .flex()
            .flex_col()
            .gap(px(8.0))
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .font_weight(FontWeight::MEDIUM)
                            .child(i18n.t("projects.title")),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(theme.text_muted)
                            .child(i18n.format("projects.count", &[("count", count.as_str())])),
                    ),
            )
            .children(projects.iter().map(|project| {
                let updated = i18n.format("projects.updated", &[("date", project.updated_at_local().as_str())]);
                let project_for_click = project.clone();
                let hover_bg = theme.background_element;
                let border_active = theme.border_active;

                div()
                    .id(SharedString::from(format!("project-{}", project.id)))
                    .px(px(12.0))
                    .py(px(10.0))
                    .rounded(px(6.0))
                    .bg(theme.background)
                    .border_1()
                    .border_color(theme.border)
                    .cursor_pointer()
                    .hover(move |style| style.bg(hover_bg).border_color(border_active))
                    .on_click(move |_event, _window, cx| {
                        panel::open_project(project_for_click.clone(), cx);
                    })
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .gap(px(2.0))
                            .child(
                                div()
                                    .font_weight(FontWeight::BOLD)
                                    .text_ellipsis()
                                    .child(project.filename.clone()),
                            )
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(theme.text_muted)
                                    .child(updated),
                            ),
                    )
            }))
            .into_any_element()
    }
}

impl Render for ProjectsView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();

        div()
            .id("projects-panel")
            .flex()
            .flex_col()
            .size_full()
            .p(px(16.0))
            .bg(theme.background_panel)
            .overflow_y_scroll()
            .child(self.render_header(cx))
            .child(self.render_projects_list(cx))
    }
}
