use gpui::Global;
use serde_json::Value;
use std::collections::HashMap;
use std::env;

const EN: &str = include_str!("../i18n/en.json");
const FR: &str = include_str!("../i18n/fr.json");

#[derive(Clone, Debug)]
pub struct I18n {
    locale: String,
    messages: HashMap<String, String>,
}

impl I18n {
    pub fn new(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
            messages: load_messages(locale),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn t(&self, key: &str) -> String {
        self.messages
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    pub fn format(&self, key: &str, params: &[(&str, &str)]) -> String {
        let mut value = self.t(key);
        for (param, replacement) in params {
            value = value.replace(&format!("{{{param}}}"), replacement);
        }
        value
    }
}

impl Global for I18n {}

/// `fr_FR.UTF-8` -> `fr_fr`
fn normalize_locale(value: &str) -> Option<String> {
    let trimmed = value.trim();
    let normalized = trimmed
        .split('.')
        .next()
        .unwrap_or(trimmed)
        .replace('-', "_")
        .to_lowercase();
    (!normalized.is_empty()).then_some(normalized)
}

fn detect_locale() -> String {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .into_iter()
        .filter_map(|key| env::var(key).ok())
        .find_map(|value| normalize_locale(&value))
        .unwrap_or_else(|| "fr".to_string())
}

fn parse(raw: &str) -> HashMap<String, String> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => map
            .into_iter()
            .filter_map(|(k, v)| v.as_str().map(|s| (k, s.to_string())))
            .collect(),
        _ => HashMap::new(),
    }
}

/// English for `en*` locales, French otherwise; missing keys fall back to English.
fn load_messages(locale: &str) -> HashMap<String, String> {
    let mut messages = parse(EN);
    if !locale.to_lowercase().starts_with("en") {
        messages.extend(parse(FR));
    }
    messages
}

pub fn init(cx: &mut gpui::App) {
    let i18n = I18n::new(&detect_locale());
    tracing::debug!("Locale: {}", i18n.locale());
    cx.set_global(i18n);
}
