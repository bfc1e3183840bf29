//! Sidebar component
//!
//! Section tab rail of the side panel. Renders inline within the parent
//! AppRoot context.

use gpui::prelude::*;
use gpui::*;
use crate::app::AppRoot;
use crate::i18n::I18n;
use crate::state::SideSection;
use crate::theme::Theme;

/// Sidebar rendering functions
///
/// Instead of being a separate Entity, Sidebar provides static methods
/// that render within the parent's context, allowing direct state updates.
pub struct Sidebar;

impl Sidebar {
    /// Render the tab rail inline within the AppRoot context
    pub fn render_inline(
        active_section: SideSection,
        collapsed: bool,
        cx: &mut Context<AppRoot>,
    ) -> impl IntoElement {
        let theme = cx.global::<Theme>();

        div()
            .w(px(72.0))
            .h_full()
            .flex()
            .flex_col()
            .items_center()
            .bg(theme.background)
            .border_r_1()
            .border_color(theme.border)
            .child(Self::render_header(cx))
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .gap(px(4.0))
                    .py(px(8.0))
                    .child(Self::render_tab(SideSection::Projects, "▤", active_section, cx))
                    .child(Self::render_tab(SideSection::Document, "◧", active_section, cx)),
            )
            .child(Self::render_footer(collapsed, cx))
    }

    fn render_header(cx: &Context<AppRoot>) -> impl IntoElement {
        let theme = cx.global::<Theme>();
        let i18n = cx.global::<I18n>();

        div()
            .h(px(48.0))
            .w_full()
            .flex()
            .items_center()
            .justify_center()
            .border_b_1()
            .border_color(theme.border)
            .child(
                div()
                    .w(px(28.0))
                    .h(px(28.0))
                    .rounded(px(6.0))
                    .bg(theme.primary)
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_sm()
                    .font_weight(FontWeight::BOLD)
                    .text_color(theme.text_on_accent)
                    .child(i18n.t("app.short_name")),
            )
    }

    fn render_tab(
        section: SideSection,
        icon: &'static str,
        active_section: SideSection,
        cx: &mut Context<AppRoot>,
    ) -> impl IntoElement {
        let theme = cx.global::<Theme>();
        let i18n = cx.global::<I18n>();
        let is_active = active_section == section;

        let label = match section {
            SideSection::Projects => i18n.t("nav.projects"),
            SideSection::Document => i18n.t("nav.document"),
        };

        let text_color = if is_active { theme.primary } else { theme.text_muted };
        let bg = if is_active {
            theme.primary.opacity(0.12)
        } else {
            Hsla::transparent_black()
        };
        let hover_bg = theme.background_element;

        div()
            .id(SharedString::from(format!("section-{:?}", section)))
            .w(px(64.0))
            .py(px(8.0))
            .rounded(px(6.0))
            .bg(bg)
            .flex()
            .flex_col()
            .items_center()
            .gap(px(2.0))
            .cursor_pointer()
            .hover(move |style| style.bg(hover_bg))
            .on_click(cx.listener(move |this, _event, _window, cx| {
                this.set_section(section, cx);
            }))
            .child(div().text_lg().text_color(text_color).child(icon))
            .child(div().text_xs().text_color(text_color).child(label))
    }

    fn render_footer(collapsed: bool, cx: &mut Context<AppRoot>) -> impl IntoElement {
        let theme = cx.global::<Theme>();
        let i18n = cx.global::<I18n>();
        let hover_bg = theme.background_element;
        let (glyph, tooltip) = if collapsed {
            (">>", i18n.t("nav.expand"))
        } else {
            ("<<", i18n.t("nav.collapse"))
        };

        div()
            .id("collapse-toggle")
            .w_full()
            .py(px(10.0))
            .flex()
            .flex_col()
            .items_center()
            .border_t_1()
            .border_color(theme.border)
            .cursor_pointer()
            .hover(move |style| style.bg(hover_bg))
            .on_click(cx.listener(|this, _event, _window, cx| {
                this.toggle_side_panel(cx);
            }))
            .child(div().text_sm().text_color(theme.text_muted).child(glyph))
            .child(div().text_xs().text_color(theme.text_muted).child(tooltip))
    }
}
