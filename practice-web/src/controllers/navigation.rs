use std::cell::Cell;
use std::rc::Rc;

use gloo::events::EventListener;
use practice_core::MenuState;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Node};

use crate::dom::{self, DomError};

pub const BURGER_ID: &str = "burger";
pub const MENU_ID: &str = "mobileMenu";
pub const LINK_SELECTOR: &str = ".mobile-menu__link";
pub const BURGER_ACTIVE_CLASS: &str = "burger--active";
pub const MENU_OPEN_CLASS: &str = "mobile-menu--open";

/// Slide-out menu bound to its toggle control.
pub struct MobileNav {
    document: Document,
    burger: Element,
    menu: Element,
    state: Cell<MenuState>,
}

impl MobileNav {
    /// # Errors
    /// Returns an error if either the toggle or the menu panel is missing.
    pub fn locate(document: &Document) -> Result<Self, DomError> {
        Ok(Self {
            document: document.clone(),
            burger: dom::require(document, BURGER_ID)?,
            menu: dom::require(document, MENU_ID)?,
            state: Cell::new(MenuState::default()),
        })
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.get().is_open()
    }

    pub fn toggle(&self) {
        let mut state = self.state.get();
        state.toggle();
        self.state.set(state);
        self.render();
    }

    pub fn close(&self) {
        let mut state = self.state.get();
        if state.close() {
            self.state.set(state);
            self.render();
        }
    }

    /// Whether `target` lies inside the menu or its toggle.
    #[must_use]
    pub fn contains(&self, target: Option<&Node>) -> bool {
        self.menu.contains(target) || self.burger.contains(target)
    }

    fn render(&self) {
        let state = self.state.get();
        dom::set_class(&self.burger, BURGER_ACTIVE_CLASS, state.is_open());
        dom::set_class(&self.menu, MENU_OPEN_CLASS, state.is_open());
        dom::set_scroll_locked(&self.document, state.locks_scroll());
    }
}

/// # Errors
/// Returns an error if the menu markup is absent.
pub fn install(document: &Document) -> Result<Rc<MobileNav>, DomError> {
    let nav = Rc::new(MobileNav::locate(document)?);

    {
        let burger = nav.burger.clone();
        let nav = Rc::clone(&nav);
        EventListener::new(&burger, "click", move |_| nav.toggle()).forget();
    }

    for link in dom::query_all(document, LINK_SELECTOR) {
        let nav = Rc::clone(&nav);
        EventListener::new(&link, "click", move |_| nav.close()).forget();
    }

    {
        let nav = Rc::clone(&nav);
        EventListener::new(document, "click", move |event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            if !nav.contains(target.as_ref()) {
                nav.close();
            }
        })
        .forget();
    }

    Ok(nav)
}
