use chrono::NaiveDate;
use js_sys::{Date, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions, Storage, Window,
};

/// Failure to enhance part of the page.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("element {0} not found")]
    Missing(&'static str),
    #[error("browser API failed: {0}")]
    Js(String),
}

impl DomError {
    /// Absent markup is expected on pages that don't carry a component.
    #[must_use]
    pub const fn is_absence(&self) -> bool {
        matches!(self, Self::Missing(_))
    }
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(js_error_message(&value))
    }
}

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Look up an element by id and cast it.
///
/// # Errors
/// Returns [`DomError::Missing`] if no element with `id` exists or it has a different type.
pub fn require<T: JsCast>(document: &Document, id: &'static str) -> Result<T, DomError> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or(DomError::Missing(id))
}

/// All elements matching `selector`; an invalid selector matches nothing.
#[must_use]
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|idx| list.get(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Add or remove a class.
pub fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

#[must_use]
pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Lock or release page scrolling via the body's inline `overflow`.
pub fn set_scroll_locked(document: &Document, locked: bool) {
    let Some(body) = document.body() else {
        return;
    };
    let style = body.style();
    let _ = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
}

#[must_use]
pub fn scroll_locked(document: &Document) -> bool {
    document
        .body()
        .and_then(|body| body.style().get_property_value("overflow").ok())
        .is_some_and(|value| value == "hidden")
}

/// Show or hide an element through its inline `display`.
pub fn set_displayed(element: &HtmlElement, displayed: bool) {
    let _ = element
        .style()
        .set_property("display", if displayed { "flex" } else { "none" });
}

/// Current vertical scroll offset.
#[must_use]
pub fn scroll_offset(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn smooth_scroll_to_top(window: &Window) {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn smooth_scroll_into_view(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Today's date in the browser's local time zone.
#[must_use]
pub fn today() -> Option<NaiveDate> {
    let now = Date::new_0();
    let year = i32::try_from(now.get_full_year()).ok()?;
    NaiveDate::from_ymd_opt(year, now.get_month() + 1, now.get_date())
}

/// A page-level global such as `window.__announcements__`, when defined.
#[must_use]
pub fn page_global(window: &Window, name: &str) -> Option<JsValue> {
    Reflect::get(window, &JsValue::from_str(name))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("window unavailable"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}
