//! Document section of the side panel

use gpui::prelude::*;
use gpui::*;

use crate::i18n::I18n;
use crate::state::AppState;
use crate::theme::Theme;

/// Name and revision of the design on the canvas
pub fn render_document_section(cx: &App) -> impl IntoElement {
    let state = cx.global::<AppState>();
    let theme = cx.global::<Theme>();
    let i18n = cx.global::<I18n>();

    let body = if state.document.is_empty() {
        div()
            .text_sm()
            .text_color(theme.text_muted)
            .child(i18n.t("document.none"))
    } else {
        let name = state
            .document_name
            .clone()
            .unwrap_or_else(|| i18n.t("canvas.untitled"));
        let revision = state.document.revision().to_string();

        div()
            .flex()
            .flex_col()
            .gap(px(4.0))
            .child(div().font_weight(FontWeight::BOLD).child(name))
            .child(
                div()
                    .text_xs()
                    .text_color(theme.text_muted)
                    .child(i18n.format("document.revision", &[("revision", revision.as_str())])),
            )
    };

    div()
        .flex()
        .flex_col()
        .size_full()
        .gap(px(12.0))
        .p(px(16.0))
        .bg(theme.background_panel)
        .child(
            div()
                .text_lg()
                .font_weight(FontWeight::SEMIBOLD)
                .child(i18n.t("document.title")),
        )
        .child(body)
}
