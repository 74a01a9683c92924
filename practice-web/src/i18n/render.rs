use crate::i18n::bundle::with_bundle;
use serde_json::Value;

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    let mut current = obj;
    for k in key.split('.') {
        current = match current {
            Value::Array(items) => items.get(k.parse::<usize>().ok()?)?,
            _ => current.get(k)?,
        };
    }
    Some(current)
}

fn resolve(key: &str) -> Option<String> {
    with_bundle(|bundle| {
        get_nested_value(&bundle.translations, key)
            .or_else(|| get_nested_value(&bundle.fallback, key))
            .and_then(Value::as_str)
            .map(str::to_string)
    })
}

/// Translate a key to the current language
///
/// Falls back to the site language, then to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    resolve(key).unwrap_or_else(|| key.to_string())
}

/// Full month name for a zero-based month index.
#[must_use]
pub fn month_name(month: u32) -> String {
    t(&format!("calendar.months.{month}"))
}

/// Abbreviated month name for a zero-based month index.
#[must_use]
pub fn month_short(month: u32) -> String {
    t(&format!("calendar.months_short.{month}"))
}
