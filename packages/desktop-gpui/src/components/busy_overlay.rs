//! Full-window overlay shown while a panel workflow is in flight

use gpui::prelude::*;
use gpui::*;
use std::time::Duration;

use crate::i18n::I18n;
use crate::theme::{scrim, Theme};

/// Render the blocking overlay with an animated indicator and caption
pub fn render_busy_overlay(cx: &App) -> impl IntoElement {
    let theme = cx.global::<Theme>();
    let i18n = cx.global::<I18n>();

    div()
        .id("busy-overlay")
        .absolute()
        .inset_0()
        .bg(scrim(0.5))
        .flex()
        .flex_col()
        .items_center()
        .justify_center()
        .gap(px(20.0))
        // Swallow clicks so nothing underneath can start another workflow
        .on_mouse_down(MouseButton::Left, |_event, _window, cx| cx.stop_propagation())
        .child(
            div()
                .w(px(48.0))
                .h(px(48.0))
                .rounded_full()
                .border_4()
                .border_color(theme.text_on_accent)
                .with_animation(
                    "busy-pulse",
                    Animation::new(Duration::from_millis(900))
                        .repeat()
                        .with_easing(pulsating_between(0.3, 1.0)),
                    |el, delta| el.opacity(delta),
                ),
        )
        .child(
            div()
                .text_2xl()
                .text_color(theme.text_on_accent)
                .child(i18n.t("busy.caption")),
        )
}
