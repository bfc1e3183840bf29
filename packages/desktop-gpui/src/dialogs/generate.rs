//! "Create with AI" dialog
//!
//! Collects the generation prompt. Submitting starts the generation
//! workflow; the dialog stays open until it succeeds.

use gpui::prelude::*;
use gpui::*;

use crate::components::text_input::{InputChanged, InputSubmitted, TextInput};
use crate::i18n::I18n;
use crate::panel;
use crate::state::AppState;
use crate::theme::Theme;

/// Dialog was dismissed without generating
#[derive(Clone)]
pub struct DialogDismissed;

pub struct GenerateDialog {
    prompt_input: Entity<TextInput>,
    _subscriptions: Vec<Subscription>,
}

impl EventEmitter<DialogDismissed> for GenerateDialog {}

impl GenerateDialog {
    pub fn new(prompt: &str, cx: &mut Context<Self>) -> Self {
        let placeholder = cx.global::<I18n>().t("ai.placeholder");
        let prompt_input = cx.new(|cx| TextInput::new(&placeholder, cx).with_text(prompt));

        let subscriptions = vec![
            cx.subscribe(&prompt_input, |_this, _input, event: &InputChanged, cx| {
                cx.update_global::<AppState, _>(|state, _cx| state.panel.set_prompt(&event.text));
            }),
            cx.subscribe(&prompt_input, |this, _input, _event: &InputSubmitted, cx| {
                this.generate(cx);
            }),
        ];

        Self {
            prompt_input,
            _subscriptions: subscriptions,
        }
    }

    pub fn focus(&self, window: &mut Window, cx: &mut Context<Self>) {
        self.prompt_input
            .update(cx, |input, cx| input.focus(window, cx));
    }

    fn generate(&mut self, cx: &mut Context<Self>) {
        if cx.global::<AppState>().is_busy() {
            return;
        }
        let prompt = self.prompt_input.read(cx).text().to_string();
        cx.update_global::<AppState, _>(|state, _cx| state.panel.set_prompt(&prompt));
        panel::create_with_ai(cx);
    }

    fn dismiss(&mut self, cx: &mut Context<Self>) {
        cx.emit(DialogDismissed);
    }
}

impl Render for GenerateDialog {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();
        let i18n = cx.global::<I18n>();

        div()
            .id("generate-dialog")
            .w(px(480.0))
            .bg(theme.background_panel)
            .border_1()
            .border_color(theme.border)
            .rounded(px(12.0))
            .shadow_lg()
            .p(px(20.0))
            .flex()
            .flex_col()
            .gap(px(16.0))
            // Clicks inside the dialog must not reach the dismissing backdrop
            .on_click(|_event, _window, cx| cx.stop_propagation())
            .child(
                div()
                    .text_lg()
                    .font_weight(FontWeight::SEMIBOLD)
                    .child(i18n.t("ai.title")),
            )
            .child(
                div()
                    .text_color(theme.text_muted)
                    .child(i18n.t("ai.instructions")),
            )
            .child(self.prompt_input.clone())
            .child(
                div()
                    .flex()
                    .justify_end()
                    .gap(px(8.0))
                    .child(
                        div()
                            .id("cancel-generate")
                            .px(px(16.0))
                            .py(px(8.0))
                            .rounded(px(6.0))
                            .bg(theme.background_element)
                            .cursor_pointer()
                            .hover(|s| s.opacity(0.8))
                            .on_click(cx.listener(|this, _event, _window, cx| {
                                this.dismiss(cx);
                            }))
                            .child(i18n.t("ai.cancel")),
                    )
                    .child(
                        div()
                            .id("confirm-generate")
                            .px(px(16.0))
                            .py(px(8.0))
                            .rounded(px(6.0))
                            .bg(theme.primary)
                            .text_color(theme.text_on_accent)
                            .cursor_pointer()
                            .hover(|s| s.opacity(0.9))
                            .on_click(cx.listener(|this, _event, _window, cx| {
                                this.generate(cx);
                            }))
                            .child(i18n.t("ai.generate")),
                    ),
            )
    }
}
