#![forbid(unsafe_code)]
//! Browser behaviour for the practice website.
//!
//! The server renders every page; this crate only enhances the markup it
//! finds. Each feature checks for its own elements and declines quietly
//! when they're absent, so one bundle serves every page.
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

pub mod a11y;
pub mod calendar;
pub mod config;
pub mod controllers;
pub mod dom;
pub mod i18n;
pub mod logging;
pub mod paths;
pub mod storage;

use config::SiteConfig;
use controllers::{anchors, navigation, scroll, sections, theme};

/// Log a feature that didn't install; missing markup is routine.
fn report(feature: &str, absent: bool, err: &dyn std::fmt::Display) {
    if absent {
        log::debug!("{feature} skipped: {err}");
    } else {
        log::warn!("{feature} disabled: {err}");
    }
}

/// Install every page enhancement that the current document supports.
pub fn enhance(window: &Window, document: &Document, config: &SiteConfig) {
    let settings = &config.settings;

    if let Err(err) = theme::install(window, document, &settings.theme_storage_key) {
        report("theme", err.is_absence(), &err);
    }
    if let Err(err) = navigation::install(document) {
        report("mobile menu", err.is_absence(), &err);
    }
    if let Err(err) = scroll::install_scroll_state(window, document, settings) {
        report("scroll state", err.is_absence(), &err);
    }
    match scroll::install_reveal(document, settings) {
        Ok(count) => log::debug!("observing {count} fade-in elements"),
        Err(err) => report("fade-in", err.is_absence(), &err),
    }
    let links = anchors::install(document);
    log::debug!("smooth scrolling {links} in-page links");

    if let Err(err) = sections::install_help_toggle(document) {
        report("help toggle", err.is_absence(), &err);
    }
    let cards = sections::install_service_cards(document);
    log::debug!("{cards} service cards collapsible");
    sections::open_deep_linked_card(window, document, settings.deep_link_delay_ms);

    if let Err(err) = calendar::install(window, document, config) {
        report("calendar", err.is_absence(), &err);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init(logging::compile_time_level());

    let (Some(window), Some(document)) = (dom::window(), dom::document()) else {
        return;
    };
    let config = SiteConfig::load(&window, &document);
    log::set_max_level(config.log_level());
    i18n::set_lang(&config.lang);
    log::info!("enhancing page ({})", config.lang);
    enhance(&window, &document, &config);
}
