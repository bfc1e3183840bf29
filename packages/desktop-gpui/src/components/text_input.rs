//! Single-line text input
//!
//! Used for the project search box and the AI prompt. Emits an event on every
//! edit and on enter.

use gpui::prelude::*;
use gpui::*;
use crate::theme::Theme;

/// The text changed
#[derive(Clone)]
pub struct InputChanged {
    pub text: String,
}

/// Enter was pressed
#[derive(Clone)]
pub struct InputSubmitted {
    pub text: String,
}

/// Text input component
pub struct TextInput {
    focus_handle: FocusHandle,
    text: String,
    cursor_position: usize,
    placeholder: String,
    /// Leading glyph, e.g. a magnifier for search
    icon: Option<SharedString>,
}

impl TextInput {
    pub fn new(placeholder: &str, cx: &mut Context<Self>) -> Self {
        Self {
            focus_handle: cx.focus_handle(),
            text: String::new(),
            cursor_position: 0,
            placeholder: placeholder.to_string(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self.cursor_position = self.text.len();
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn focus(&self, window: &mut Window, cx: &mut Context<Self>) {
        self.focus_handle.focus(window, cx);
    }

    fn changed(&mut self, cx: &mut Context<Self>) {
        cx.emit(InputChanged {
            text: self.text.clone(),
        });
        cx.notify();
    }

    fn insert_text(&mut self, text: &str, cx: &mut Context<Self>) {
        let text = text.replace('\n', " ");
        self.text.insert_str(self.cursor_position, &text);
        self.cursor_position += text.len();
        self.changed(cx);
    }

    fn backspace(&mut self, cx: &mut Context<Self>) {
        if self.cursor_position == 0 {
            return;
        }
        let prev = self.text[..self.cursor_position]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        self.text.remove(prev);
        self.cursor_position = prev;
        self.changed(cx);
    }

    fn delete(&mut self, cx: &mut Context<Self>) {
        if self.cursor_position >= self.text.len() {
            return;
        }
        self.text.remove(self.cursor_position);
        self.changed(cx);
    }

    fn move_left(&mut self, cx: &mut Context<Self>) {
        if self.cursor_position > 0 {
            self.cursor_position = self.text[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            cx.notify();
        }
    }

    fn move_right(&mut self, cx: &mut Context<Self>) {
        if self.cursor_position < self.text.len() {
            self.cursor_position = self.text[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(self.text.len());
            cx.notify();
        }
    }

    fn handle_key_down(&mut self, event: &KeyDownEvent, cx: &mut Context<Self>) {
        let modifiers = event.keystroke.modifiers;

        match event.keystroke.key.as_str() {
            "backspace" => self.backspace(cx),
            "delete" => self.delete(cx),
            "left" => self.move_left(cx),
            "right" => self.move_right(cx),
            "home" => {
                self.cursor_position = 0;
                cx.notify();
            }
            "end" => {
                self.cursor_position = self.text.len();
                cx.notify();
            }
            "enter" => {
                cx.emit(InputSubmitted {
                    text: self.text.clone(),
                });
            }
            "escape" | "tab" => {}
            key => {
                if modifiers.control || modifiers.alt || modifiers.platform {
                    return;
                }
                if let Some(key_char) = &event.keystroke.key_char {
                    self.insert_text(key_char, cx);
                } else if key == "space" {
                    self.insert_text(" ", cx);
                } else if key.chars().count() == 1 {
                    self.insert_text(key, cx);
                }
            }
        }
    }

    fn render_text_with_cursor(&self, is_focused: bool, theme: &Theme) -> impl IntoElement {
        if self.text.is_empty() {
            return div()
                .flex()
                .when(is_focused, |el| {
                    el.child(div().w(px(2.0)).h(px(18.0)).bg(theme.primary))
                })
                .child(
                    div()
                        .text_color(theme.text_muted)
                        .child(self.placeholder.clone()),
                )
                .into_any_element();
        }

        let (before, after) = self.text.split_at(self.cursor_position);

        div()
            .flex()
            .overflow_hidden()
            .child(div().child(before.to_string()))
            .when(is_focused, |el| {
                el.child(div().w(px(2.0)).h(px(18.0)).bg(theme.primary))
            })
            .child(div().child(after.to_string()))
            .into_any_element()
    }
}

impl EventEmitter<InputChanged> for TextInput {}
impl EventEmitter<InputSubmitted> for TextInput {}

impl Focusable for TextInput {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for TextInput {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();
        let is_focused = self.focus_handle.is_focused(window);

        div()
            .id("text-input")
            .track_focus(&self.focus_handle)
            .w_full()
            .px(px(12.0))
            .py(px(8.0))
            .rounded(px(6.0))
            .bg(theme.background)
            .border_1()
            .border_color(if is_focused { theme.border_active } else { theme.border })
            .cursor_text()
            .flex()
            .items_center()
            .gap(px(8.0))
            .on_key_down(cx.listener(|this, event, _window, cx| {
                this.handle_key_down(event, cx);
            }))
            .on_click(cx.listener(|this, _event, window, cx| {
                this.focus(window, cx);
            }))
            .when_some(self.icon.clone(), |el, icon| {
                el.child(div().text_color(theme.text_muted).child(icon))
            })
            .child(self.render_text_with_cursor(is_focused, theme))
    }
}
