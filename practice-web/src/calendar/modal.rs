use std::cell::Cell;
use std::rc::Rc;

use chrono::Datelike;
use gloo::events::EventListener;
use practice_core::{Announcements, EventRecord, ModalState, long_date};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, KeyboardEvent, Node};

use crate::dom::{self, DomError};
use crate::{i18n, paths};

pub const OVERLAY_ID: &str = "annModalOverlay";
pub const TITLE_ID: &str = "annModalTitle";
pub const DATE_ID: &str = "annModalDate";
pub const TIME_ID: &str = "annModalTime";
pub const LOCATION_ID: &str = "annModalLocation";
pub const DESCRIPTION_ID: &str = "annModalDesc";
pub const IMAGE_ID: &str = "annModalImage";
pub const CLOSE_ID: &str = "annModalClose";
pub const OPEN_CLASS: &str = "ann-modal-overlay--open";
pub const IMAGE_VISIBLE_CLASS: &str = "ann-modal__image--visible";

/// Detail overlay for a single announcement.
///
/// The markup ships with the page; this fills it in and tracks which
/// record is shown.
pub struct AnnouncementModal {
    document: Document,
    announcements: Rc<Announcements>,
    static_prefix: String,
    overlay: Element,
    title: Element,
    date: HtmlElement,
    time: HtmlElement,
    location: HtmlElement,
    description: Element,
    image: Element,
    state: Cell<ModalState>,
}

impl AnnouncementModal {
    /// # Errors
    /// Returns an error naming the first missing part of the modal markup.
    pub fn locate(
        document: &Document,
        announcements: Rc<Announcements>,
        static_prefix: &str,
    ) -> Result<Self, DomError> {
        Ok(Self {
            document: document.clone(),
            announcements,
            static_prefix: static_prefix.to_string(),
            overlay: dom::require(document, OVERLAY_ID)?,
            title: dom::require(document, TITLE_ID)?,
            date: dom::require(document, DATE_ID)?,
            time: dom::require(document, TIME_ID)?,
            location: dom::require(document, LOCATION_ID)?,
            description: dom::require(document, DESCRIPTION_ID)?,
            image: dom::require(document, IMAGE_ID)?,
            state: Cell::new(ModalState::default()),
        })
    }

    #[must_use]
    pub fn shown(&self) -> Option<usize> {
        self.state.get().shown()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.get().is_open()
    }

    /// Show the record at `index`, replacing any record already shown.
    pub fn open(&self, index: usize) {
        let Some(record) = self.announcements.record(index) else {
            log::warn!("no announcement at index {index}");
            return;
        };
        self.fill(record);

        let mut state = self.state.get();
        state.open(index);
        self.state.set(state);
        dom::set_class(&self.overlay, OPEN_CLASS, true);
        dom::set_scroll_locked(&self.document, state.locks_scroll());
    }

    pub fn close(&self) {
        let mut state = self.state.get();
        if state.close() {
            self.state.set(state);
            dom::set_class(&self.overlay, OPEN_CLASS, false);
            dom::set_scroll_locked(&self.document, state.locks_scroll());
        }
    }

    fn fill(&self, record: &EventRecord) {
        self.title.set_text_content(Some(&record.title));

        let date = record.parsed_date().map_or_else(
            || record.date.clone(),
            |date| long_date(date, &i18n::month_name(date.month0())),
        );
        set_row(&self.date, Some(&date));
        set_row(&self.time, record.time());
        set_row(&self.location, record.location());

        self.description.set_inner_html(record.description_html());

        self.image.set_inner_html("");
        let shown = record
            .image()
            .is_some_and(|path| self.append_image(path, &record.title).is_ok());
        dom::set_class(&self.image, IMAGE_VISIBLE_CLASS, shown);
    }

    fn append_image(&self, path: &str, alt: &str) -> Result<(), DomError> {
        let img: HtmlImageElement = self
            .document
            .create_element("img")?
            .dyn_into()
            .map_err(|_| DomError::Js("img is not an image element".to_string()))?;
        img.set_src(&paths::static_asset(&self.static_prefix, path));
        img.set_alt(alt);
        self.image.append_child(&img)?;
        Ok(())
    }
}

/// Fill a `display: flex` row's `<span>` or hide the row entirely.
fn set_row(row: &HtmlElement, text: Option<&str>) {
    match text {
        Some(text) => {
            if let Ok(Some(span)) = row.query_selector("span") {
                span.set_text_content(Some(text));
            }
            dom::set_displayed(row, true);
        }
        None => dom::set_displayed(row, false),
    }
}

/// Close on the close button, a click on the backdrop itself, or Escape.
pub fn install_dismiss(modal: &Rc<AnnouncementModal>) {
    match dom::require::<Element>(&modal.document, CLOSE_ID) {
        Ok(button) => {
            let modal = Rc::clone(modal);
            EventListener::new(&button, "click", move |_| modal.close()).forget();
        }
        Err(err) => log::debug!("{err}; modal closes via backdrop and Escape only"),
    }

    {
        let overlay = modal.overlay.clone();
        let modal = Rc::clone(modal);
        EventListener::new(&overlay, "click", move |event| {
            let on_backdrop = event
                .target()
                .and_then(|target| target.dyn_into::<Node>().ok())
                .is_some_and(|target| modal.overlay.is_same_node(Some(&target)));
            if on_backdrop {
                modal.close();
            }
        })
        .forget();
    }

    let document = modal.document.clone();
    let modal = Rc::clone(modal);
    EventListener::new(&document, "keydown", move |event| {
        let escape = event
            .dyn_ref::<KeyboardEvent>()
            .is_some_and(|key| key.key() == "Escape");
        if escape && modal.is_open() {
            modal.close();
        }
    })
    .forget();
}
