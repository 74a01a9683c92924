use gloo::events::{EventListener, EventListenerOptions};
use practice_core::scroll::anchor_selector;
use web_sys::Document;

use crate::dom;

pub const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;

/// Smooth-scroll same-page links to their targets.
///
/// Links whose fragment doesn't resolve keep the browser's default jump.
/// Returns the number of links wired.
pub fn install(document: &Document) -> usize {
    let anchors = dom::query_all(document, ANCHOR_SELECTOR);
    for anchor in &anchors {
        let doc = document.clone();
        let link = anchor.clone();
        EventListener::new_with_options(
            anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(href) = link.get_attribute("href") else {
                    return;
                };
                let Some(selector) = anchor_selector(&href) else {
                    return;
                };
                if let Ok(Some(target)) = doc.query_selector(selector) {
                    event.prevent_default();
                    dom::smooth_scroll_into_view(&target);
                }
            },
        )
        .forget();
    }
    anchors.len()
}
