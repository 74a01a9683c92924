// Accessibility helpers

use web_sys::Element;

/// Reflect an open/closed state in `aria-expanded`.
pub fn set_expanded(element: &Element, expanded: bool) {
    let _ = element.set_attribute("aria-expanded", aria_bool(expanded));
}

#[must_use]
pub const fn aria_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Read `aria-expanded`, treating anything but `"true"` as collapsed.
#[must_use]
pub fn is_expanded(element: &Element) -> bool {
    element
        .get_attribute("aria-expanded")
        .is_some_and(|v| v == "true")
}
