use std::rc::Rc;

use gloo::events::EventListener;
use practice_core::theme::{DARK_SCHEME_QUERY, THEME_ATTRIBUTE};
use practice_core::{Theme, ThemePreference};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MediaQueryList, MediaQueryListEvent, Window};

use crate::dom::{self, DomError};
use crate::storage::LocalPreferenceStore;

pub const TOGGLE_ID: &str = "themeToggle";

/// Theme currently applied to the document, if any.
#[must_use]
pub fn current(root: &Element) -> Option<Theme> {
    root.get_attribute(THEME_ATTRIBUTE)
        .as_deref()
        .and_then(Theme::parse)
}

pub fn apply(root: &Element, theme: Theme) {
    let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
}

/// Apply the effective theme, follow OS changes, and wire the toggle control.
///
/// # Errors
/// Returns an error only when the document has no root element; a missing
/// toggle control just disables click-to-toggle.
pub fn install(window: &Window, document: &Document, storage_key: &str) -> Result<(), DomError> {
    let root = document
        .document_element()
        .ok_or(DomError::Missing("html"))?;
    let prefs = Rc::new(ThemePreference::new(LocalPreferenceStore, storage_key));

    let media: Option<MediaQueryList> = window.match_media(DARK_SCHEME_QUERY).ok().flatten();
    let prefers_dark = media.as_ref().is_some_and(MediaQueryList::matches);
    let initial = prefs.resolve(prefers_dark);
    apply(&root, initial);
    log::debug!("theme resolved to {initial}");

    if let Some(media) = media {
        let root = root.clone();
        let prefs = Rc::clone(&prefs);
        EventListener::new(&media, "change", move |event| {
            let dark = event
                .dyn_ref::<MediaQueryListEvent>()
                .is_some_and(MediaQueryListEvent::matches);
            if let Some(theme) = prefs.follow_os(dark) {
                apply(&root, theme);
            }
        })
        .forget();
    }

    match dom::require::<Element>(document, TOGGLE_ID) {
        Ok(toggle) => {
            EventListener::new(&toggle, "click", move |_| {
                let current = current(&root).unwrap_or(Theme::Light);
                let next = prefs.toggle(current).unwrap_or_else(|err| {
                    log::warn!("theme choice not saved: {err}");
                    current.toggled()
                });
                apply(&root, next);
            })
            .forget();
        }
        Err(err) => log::debug!("{err}; theme toggle disabled"),
    }
    Ok(())
}
