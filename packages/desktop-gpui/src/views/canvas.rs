//! Editor canvas
//!
//! Shows the loaded design as a page frame with its dimensions and content
//! counts, or an empty state when nothing is open.

use gpui::prelude::*;
use gpui::*;

use crate::editor::DocumentSummary;
use crate::i18n::I18n;
use crate::state::AppState;
use crate::theme::Theme;

/// Longest edge of the page preview in pixels
const PREVIEW_EDGE: f32 = 360.0;

pub fn render_canvas(cx: &App) -> impl IntoElement {
    let state = cx.global::<AppState>();
    let theme = cx.global::<Theme>();
    let i18n = cx.global::<I18n>();

    let content = match state.document.summary() {
        Some(summary) => {
            let title = state
                .document_name
                .clone()
                .unwrap_or_else(|| i18n.t("canvas.untitled"));
            render_page(&title, &summary, theme, i18n).into_any_element()
        }
        None => div()
            .flex()
            .flex_col()
            .items_center()
            .gap(px(8.0))
            .child(
                div()
                    .text_xl()
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(theme.text_muted)
                    .child(i18n.t("canvas.empty_title")),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(theme.text_muted)
                    .child(i18n.t("canvas.empty_subtitle")),
            )
            .into_any_element(),
    };

    div()
        .id("canvas")
        .flex_1()
        .h_full()
        .flex()
        .items_center()
        .justify_center()
        .bg(theme.canvas)
        .child(content)
}

fn render_page(title: &str, summary: &DocumentSummary, theme: &Theme, i18n: &I18n) -> impl IntoElement {
    let (width, height) = preview_size(summary.width, summary.height);

    let mut details = vec![
        i18n.format("canvas.pages", &[("count", summary.page_count.to_string().as_str())]),
        i18n.format("canvas.elements", &[("count", summary.element_count.to_string().as_str())]),
    ];
    if let (Some(w), Some(h)) = (summary.width, summary.height) {
        details.push(i18n.format(
            "canvas.size",
            &[("width", format_dimension(w).as_str()), ("height", format_dimension(h).as_str())],
        ));
    }

    div()
        .flex()
        .flex_col()
        .items_center()
        .gap(px(12.0))
        .child(
            div()
                .text_lg()
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(theme.text)
                .child(title.to_string()),
        )
        .child(
            div()
                .w(px(width))
                .h(px(height))
                .bg(theme.page)
                .border_1()
                .border_color(theme.border)
                .shadow_lg(),
        )
        .child(
            div()
                .flex()
                .gap(px(16.0))
                .text_sm()
                .text_color(theme.text_muted)
                .children(details.into_iter().map(|detail| div().child(detail))),
        )
}

/// Scale the page to fit the preview box, keeping its aspect ratio
fn preview_size(width: Option<f64>, height: Option<f64>) -> (f32, f32) {
    match (width, height) {
        (Some(w), Some(h)) if w > 0.0 && h > 0.0 => {
            let scale = PREVIEW_EDGE as f64 / w.max(h);
            ((w * scale) as f32, (h * scale) as f32)
        }
        _ => (PREVIEW_EDGE, PREVIEW_EDGE),
    }
}

fn format_dimension(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}
