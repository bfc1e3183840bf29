//! Outcome notice shown after opening or generating a project

use design_sync_core::Notice;
use gpui::prelude::*;
use gpui::*;

use crate::app::AppRoot;
use crate::i18n::I18n;
use crate::theme::{scrim, Theme};

/// Translation key of the headline for a notice
pub fn headline_key(notice: &Notice) -> &'static str {
    match notice {
        Notice::OpenFailed { .. } => "notice.open_failed",
        Notice::GenerationSucceeded { .. } => "notice.generation_succeeded",
        Notice::GenerationFailed { .. } => "notice.generation_failed",
    }
}

/// Render the notice as a blocking overlay with a single dismiss button
pub fn render_notice(notice: &Notice, cx: &mut Context<AppRoot>) -> impl IntoElement {
    let theme = cx.global::<Theme>();
    let i18n = cx.global::<I18n>();

    let (accent, glyph) = if notice.is_error() {
        (theme.error, "!")
    } else {
        (theme.success, "✓")
    };

    let detail = match notice {
        Notice::GenerationSucceeded { filename } => Some(filename.clone()),
        other => other.detail().map(str::to_string),
    };

    div()
        .id("notice-overlay")
        .absolute()
        .inset_0()
        .bg(scrim(0.5))
        .flex()
        .items_center()
        .justify_center()
        .child(
            div()
                .w(px(420.0))
                .bg(theme.background_panel)
                .border_1()
                .border_color(theme.border)
                .rounded(px(12.0))
                .shadow_lg()
                .p(px(20.0))
                .flex()
                .flex_col()
                .gap(px(16.0))
                .child(
                    div()
                        .flex()
                        .items_center()
                        .gap(px(12.0))
                        .child(
                            div()
                                .w(px(40.0))
                                .h(px(40.0))
                                .flex_none()
                                .rounded_full()
                                .bg(accent.opacity(0.15))
                                .flex()
                                .items_center()
                                .justify_center()
                                .child(div().text_lg().text_color(accent).child(glyph)),
                        )
                        .child(
                            div()
                                .text_lg()
                                .font_weight(FontWeight::SEMIBOLD)
                                .child(i18n.t(headline_key(notice))),
                        ),
                )
                .children(detail.map(|detail| {
                    div()
                        .text_sm()
                        .text_color(theme.text_muted)
                        .child(detail)
                }))
                .child(
                    div().flex().justify_end().child(
                        div()
                            .id("dismiss-notice")
                            .px(px(16.0))
                            .py(px(8.0))
                            .rounded(px(6.0))
                            .bg(accent)
                            .text_color(theme.text_on_accent)
                            .cursor_pointer()
                            .hover(|s| s.opacity(0.9))
                            .on_click(cx.listener(|this, _event, _window, cx| {
                                this.dismiss_notice(cx);
                            }))
                            .child(i18n.t("notice.dismiss")),
                    ),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::I18n;

    #[test]
    fn test_every_notice_has_a_translated_headline() {
        let i18n = I18n::new("en");
        let notices = [
            Notice::OpenFailed {
                filename: "bac.json".to_string(),
                detail: "404".to_string(),
            },
            Notice::GenerationSucceeded {
                filename: "bac.json".to_string(),
            },
            Notice::GenerationFailed {
                detail: "500".to_string(),
            },
        ];

        for notice in &notices {
            let key = headline_key(notice);
            assert_ne!(i18n.t(key), key);
        }
    }
}
