use once_cell::sync::Lazy;
use serde_json::Value;

/// The site's own language; also the fallback for missing keys.
pub const DEFAULT_LANG: &str = "ru";

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("ru", include_str!("../../i18n/ru.json")),
    ("en", include_str!("../../i18n/en.json")),
];

static PARSED: Lazy<Vec<(&'static str, Value)>> = Lazy::new(|| {
    LOCALE_TABLE
        .iter()
        .filter_map(|(code, data)| serde_json::from_str(data).ok().map(|value| (*code, value)))
        .collect()
});

/// Reduce a document language tag (`ru-RU`, `EN`) to a supported code.
#[must_use]
pub fn normalize_lang(tag: &str) -> Option<&'static str> {
    let primary = tag.split(['-', '_']).next()?.trim().to_ascii_lowercase();
    LOCALE_TABLE
        .iter()
        .map(|(code, _)| *code)
        .find(|code| *code == primary)
}

pub fn load_translations(lang: &str) -> Option<Value> {
    PARSED
        .iter()
        .find_map(|(code, value)| (*code == lang).then(|| value.clone()))
}
