use crate::i18n::locales::{DEFAULT_LANG, load_translations, normalize_lang};
use serde_json::Value;
use std::cell::RefCell;

pub struct I18nBundle {
    pub lang: String,
    pub translations: Value,
    pub fallback: Value,
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    let code = normalize_lang(lang)?;
    let fallback = load_translations(DEFAULT_LANG)?;
    let translations = load_translations(code)?;

    Some(I18nBundle {
        lang: code.to_string(),
        translations,
        fallback,
    })
}

fn fallback_bundle() -> I18nBundle {
    let fallback = load_translations(DEFAULT_LANG).unwrap_or(Value::Object(serde_json::Map::new()));

    I18nBundle {
        lang: DEFAULT_LANG.to_string(),
        translations: fallback.clone(),
        fallback,
    }
}

fn document_lang() -> String {
    #[cfg(all(not(test), target_arch = "wasm32"))]
    {
        web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.document_element())
            .and_then(|el| el.get_attribute("lang"))
            .unwrap_or_else(|| DEFAULT_LANG.to_string())
    }

    #[cfg(any(test, not(target_arch = "wasm32")))]
    {
        DEFAULT_LANG.to_string()
    }
}

thread_local! {
    pub(super) static CURRENT: RefCell<I18nBundle> = RefCell::new({
        build_bundle(&document_lang()).unwrap_or_else(fallback_bundle)
    });
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

/// Switch the active language.
///
/// The page template owns `<html lang>`; this only changes which strings the
/// script renders. Unsupported languages leave the current bundle in place.
/// Returns `true` if the language was applied.
pub fn set_lang(lang: &str) -> bool {
    build_bundle(lang).is_some_and(|bundle| {
        CURRENT.with(|cell| cell.replace(bundle));
        true
    })
}

/// Get the current active language code
#[must_use]
pub fn current_lang() -> String {
    with_bundle(|bundle| bundle.lang.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_bundle_loads_requested_locale() {
        let bundle = build_bundle("en-GB").expect("bundle should load");
        assert_eq!(bundle.lang, "en");
        assert!(bundle.translations.is_object());
        assert!(bundle.fallback.is_object());
    }

    #[test]
    fn fallback_bundle_defaults_to_site_language() {
        let bundle = fallback_bundle();
        assert_eq!(bundle.lang, "ru");
        assert!(bundle.translations.is_object());
    }

    #[test]
    fn unsupported_language_is_ignored() {
        assert!(set_lang("ru"));
        assert!(!set_lang("xx"));
        assert_eq!(current_lang(), "ru");
    }
}
