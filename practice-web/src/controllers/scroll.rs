use gloo::events::EventListener;
use js_sys::Array;
use practice_core::Settings;
use practice_core::scroll::past_offset;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    Window,
};

use crate::dom::{self, DomError};
use crate::i18n::t;

pub const HEADER_ID: &str = "header";
pub const HEADER_SCROLLED_CLASS: &str = "header--scrolled";
pub const SCROLL_TOP_CLASS: &str = "scroll-top";
pub const SCROLL_TOP_VISIBLE_CLASS: &str = "scroll-top--visible";
pub const REVEAL_SELECTOR: &str = ".fade-in";
pub const REVEALED_CLASS: &str = "fade-in--visible";

const CHEVRON_UP_SVG: &str = r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round"><polyline points="18 15 12 9 6 15"/></svg>"#;

/// Create the floating scroll-to-top control and append it to `body`.
///
/// # Errors
/// Returns an error if the page has no body or the element can't be created.
pub fn create_scroll_top_button(document: &Document) -> Result<Element, DomError> {
    let body = document.body().ok_or(DomError::Missing("body"))?;
    let button = document.create_element("button")?;
    button.set_class_name(SCROLL_TOP_CLASS);
    button.set_attribute("type", "button")?;
    button.set_attribute("aria-label", &t("scroll_top.label"))?;
    button.set_inner_html(CHEVRON_UP_SVG);
    body.append_child(&button)?;
    Ok(button)
}

fn sync(window: &Window, header: Option<&Element>, button: &Element, settings: &ScrollOffsets) {
    let offset = dom::scroll_offset(window);
    if let Some(header) = header {
        dom::set_class(header, HEADER_SCROLLED_CLASS, past_offset(offset, settings.header));
    }
    dom::set_class(button, SCROLL_TOP_VISIBLE_CLASS, past_offset(offset, settings.scroll_top));
}

#[derive(Clone, Copy)]
struct ScrollOffsets {
    header: f64,
    scroll_top: f64,
}

/// Header state and scroll-to-top visibility, re-evaluated on every scroll.
///
/// The header is optional; the scroll-to-top control is always created.
///
/// # Errors
/// Returns an error if the scroll-to-top control can't be created.
pub fn install_scroll_state(
    window: &Window,
    document: &Document,
    settings: &Settings,
) -> Result<(), DomError> {
    let header = document.get_element_by_id(HEADER_ID);
    if header.is_none() {
        log::debug!("element {HEADER_ID} not found; header stays static");
    }
    let button = create_scroll_top_button(document)?;
    let offsets = ScrollOffsets {
        header: settings.header_scrolled_offset,
        scroll_top: settings.scroll_top_offset,
    };
    sync(window, header.as_ref(), &button, &offsets);

    {
        let window = window.clone();
        EventListener::new(&button.clone(), "click", move |_| {
            dom::smooth_scroll_to_top(&window);
        })
        .forget();
    }

    let win = window.clone();
    EventListener::new(window, "scroll", move |_| {
        sync(&win, header.as_ref(), &button, &offsets);
    })
    .forget();
    Ok(())
}

/// One-shot fade-in for every `.fade-in` element.
///
/// Returns the number of observed elements.
///
/// # Errors
/// Returns an error if the browser has no `IntersectionObserver`.
pub fn install_reveal(document: &Document, settings: &Settings) -> Result<usize, DomError> {
    let targets = dom::query_all(document, REVEAL_SELECTOR);
    if targets.is_empty() {
        return Ok(0);
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1(REVEALED_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(settings.reveal_threshold));
    options.set_root_margin(&settings.reveal_root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for target in &targets {
        observer.observe(target);
    }
    Ok(targets.len())
}
