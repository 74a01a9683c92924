use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use practice_core::Disclosure;
use practice_core::scroll::deep_link_id;
use web_sys::{Document, Element, Window};

use crate::a11y;
use crate::dom::{self, DomError};
use crate::i18n::t;

pub const HELP_TOGGLE_ID: &str = "helpToggle";
pub const HELP_LIST_ID: &str = "helpList";
pub const HELP_LIST_OPEN_CLASS: &str = "help-list--open";
pub const HELP_LABEL_SELECTOR: &str = ".help-toggle__text";

pub const CARD_CLASS: &str = "svc-card";
pub const CARD_SELECTOR: &str = ".svc-card";
pub const CARD_HEADER_SELECTOR: &str = ".svc-card__header";
pub const CARD_OPEN_CLASS: &str = "svc-card--open";

/// Label shown on the help toggle for a given state.
#[must_use]
pub fn help_label(open: bool) -> String {
    if open { t("help.hide") } else { t("help.more") }
}

/// # Errors
/// Returns an error if the toggle or the list is missing.
pub fn install_help_toggle(document: &Document) -> Result<(), DomError> {
    let toggle: Element = dom::require(document, HELP_TOGGLE_ID)?;
    let list: Element = dom::require(document, HELP_LIST_ID)?;

    let control = toggle.clone();
    EventListener::new(&toggle, "click", move |_| {
        let mut state = Disclosure::new(dom::has_class(&list, HELP_LIST_OPEN_CLASS));
        let open = state.toggle();
        dom::set_class(&list, HELP_LIST_OPEN_CLASS, open);
        a11y::set_expanded(&control, open);
        if let Ok(Some(label)) = control.query_selector(HELP_LABEL_SELECTOR) {
            label.set_text_content(Some(&help_label(open)));
        }
    })
    .forget();
    Ok(())
}

fn set_card_open(card: &Element, open: bool) {
    dom::set_class(card, CARD_OPEN_CLASS, open);
    if let Ok(Some(header)) = card.query_selector(CARD_HEADER_SELECTOR) {
        a11y::set_expanded(&header, open);
    }
}

/// Independent per-card accordion. Returns the number of wired headers.
pub fn install_service_cards(document: &Document) -> usize {
    let headers = dom::query_all(document, CARD_HEADER_SELECTOR);
    for header in &headers {
        let button = header.clone();
        EventListener::new(header, "click", move |_| {
            let Ok(Some(card)) = button.closest(CARD_SELECTOR) else {
                return;
            };
            let mut state = Disclosure::new(dom::has_class(&card, CARD_OPEN_CLASS));
            let open = state.toggle();
            dom::set_class(&card, CARD_OPEN_CLASS, open);
            a11y::set_expanded(&button, open);
        })
        .forget();
    }
    headers.len()
}

/// Open the service card named by the URL fragment and scroll to it after `delay_ms`.
pub fn open_deep_linked_card(
    window: &Window,
    document: &Document,
    delay_ms: u32,
) -> Option<Element> {
    let hash = window.location().hash().ok()?;
    let decoded = js_sys::decode_uri_component(&hash)
        .ok()
        .and_then(|s| s.as_string())
        .unwrap_or(hash);
    let id = deep_link_id(&decoded)?;
    let card = document
        .get_element_by_id(id)
        .filter(|el| dom::has_class(el, CARD_CLASS))?;

    set_card_open(&card, true);
    log::debug!("deep link opened service card #{id}");

    let target = card.clone();
    Timeout::new(delay_ms, move || dom::smooth_scroll_into_view(&target)).forget();
    Some(card)
}
