//! Open/closed flags for the menu, collapsible sections and the detail modal
//!
//! Each state reports whether an operation actually changed anything so the
//! browser layer can skip redundant DOM writes.

/// Slide-out navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    /// Flip the menu and return the new open flag.
    pub const fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu. Returns `true` if it was open.
    pub const fn close(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        was_open
    }

    /// Scrolling must be locked exactly while the menu is open.
    #[must_use]
    pub const fn locks_scroll(self) -> bool {
        self.open
    }
}

/// Expanded/collapsed state with its accessibility attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Disclosure {
    open: bool,
}

impl Disclosure {
    #[must_use]
    pub const fn new(open: bool) -> Self {
        Self { open }
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    pub const fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub const fn open(&mut self) {
        self.open = true;
    }

    /// Value for `aria-expanded`.
    #[must_use]
    pub const fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}

/// The single announcement overlay. Holds the index of the shown record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalState {
    shown: Option<usize>,
}

impl ModalState {
    #[must_use]
    pub const fn shown(self) -> Option<usize> {
        self.shown
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        self.shown.is_some()
    }

    /// Show `index`, replacing whatever was shown before.
    pub const fn open(&mut self, index: usize) {
        self.shown = Some(index);
    }

    /// Returns `true` if the modal was open.
    pub const fn close(&mut self) -> bool {
        let was_open = self.shown.is_some();
        self.shown = None;
        was_open
    }

    #[must_use]
    pub const fn locks_scroll(self) -> bool {
        self.is_open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_close_is_idempotent() {
        let mut menu = MenuState::default();
        assert!(menu.toggle());
        assert!(menu.locks_scroll());
        assert!(menu.close());
        assert!(!menu.close());
        assert!(!menu.locks_scroll());
    }

    #[test]
    fn disclosure_reports_aria_value() {
        let mut section = Disclosure::default();
        assert_eq!(section.aria_expanded(), "false");
        assert!(section.toggle());
        assert_eq!(section.aria_expanded(), "true");
        section.open();
        assert!(section.is_open());
    }

    #[test]
    fn modal_open_overwrites_and_close_unlocks() {
        let mut modal = ModalState::default();
        modal.open(2);
        modal.open(4);
        assert_eq!(modal.shown(), Some(4));
        assert!(modal.locks_scroll());
        assert!(modal.close());
        assert!(!modal.locks_scroll());
        assert!(!modal.close());
    }
}
