//! Runtime configuration
//!
//! Settings come from `window.__site_settings__` when the page template
//! provides it; anything missing or invalid falls back to the defaults.
use log::LevelFilter;
use practice_core::{Settings, SettingsError};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

use crate::dom;
use crate::i18n;

pub const SETTINGS_GLOBAL: &str = "__site_settings__";

/// Failure to read structured data the page injected.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("could not decode {name}: {message}")]
    Decode { name: &'static str, message: String },
    #[error("invalid settings: {0}")]
    Settings(#[from] SettingsError),
}

/// Decode a page-level global, `Ok(None)` when it isn't defined.
///
/// # Errors
/// Returns [`SourceError::Decode`] if the value has the wrong shape.
pub fn read_global<T: DeserializeOwned>(
    window: &Window,
    name: &'static str,
) -> Result<Option<T>, SourceError> {
    dom::page_global(window, name)
        .map(|value| decode(name, value))
        .transpose()
}

fn decode<T: DeserializeOwned>(name: &'static str, value: JsValue) -> Result<T, SourceError> {
    serde_wasm_bindgen::from_value(value).map_err(|err| SourceError::Decode {
        name,
        message: err.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub settings: Settings,
    /// Language code the script renders strings in.
    pub lang: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_settings(Settings::default(), None)
    }
}

impl SiteConfig {
    #[must_use]
    pub fn from_settings(settings: Settings, document_lang: Option<&str>) -> Self {
        let lang = document_lang
            .and_then(i18n::normalize_lang)
            .unwrap_or(i18n::DEFAULT_LANG)
            .to_string();
        Self { settings, lang }
    }

    /// Build from JSON settings text, falling back to defaults on error.
    #[must_use]
    pub fn from_json(json: &str, document_lang: Option<&str>) -> Self {
        let settings = Settings::from_json(json).unwrap_or_else(|err| {
            log::warn!("ignoring site settings: {err}");
            Settings::default()
        });
        Self::from_settings(settings, document_lang)
    }

    /// Read settings and language from the live page.
    #[must_use]
    pub fn load(window: &Window, document: &Document) -> Self {
        let settings = match read_global::<Settings>(window, SETTINGS_GLOBAL) {
            Ok(Some(settings)) => match settings.validate() {
                Ok(()) => settings,
                Err(err) => {
                    log::warn!("ignoring site settings: {}", SourceError::from(err));
                    Settings::default()
                }
            },
            Ok(None) => Settings::default(),
            Err(err) => {
                log::warn!("ignoring site settings: {err}");
                Settings::default()
            }
        };
        let lang = document
            .document_element()
            .and_then(|root| root.get_attribute("lang"));
        Self::from_settings(settings, lang.as_deref())
    }

    /// Configured level, or the build-time default.
    #[must_use]
    pub fn log_level(&self) -> LevelFilter {
        self.settings
            .log_filter()
            .ok()
            .flatten()
            .unwrap_or_else(crate::logging::compile_time_level)
    }
}
