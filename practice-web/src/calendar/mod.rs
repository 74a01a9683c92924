//! Announcements calendar
//!
//! The month grid and the upcoming list are `yew` components mounted into
//! the page's existing containers; the detail modal is plain markup driven
//! through `web-sys`. All three share one [`Announcements`] snapshot built
//! from `window.__announcements__` at startup.

mod grid;
mod modal;
mod upcoming;

pub use grid::{
    CalendarView, CalendarWidget, CalendarWidgetProps, GRID_ID, MONTH_LABEL_ID, NEXT_ID, PREV_ID,
};
pub use modal::{AnnouncementModal, install_dismiss};
pub use upcoming::{UPCOMING_ID, UpcomingList, UpcomingListProps};

use std::rc::Rc;

use practice_core::{Announcements, EventRecord};
use web_sys::{Document, Element, Window};
use yew::Callback;

use crate::config::{SiteConfig, SourceError, read_global};
use crate::dom::{self, DomError};

pub const ANNOUNCEMENTS_GLOBAL: &str = "__announcements__";

#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    #[error(transparent)]
    Dom(#[from] DomError),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("window.__announcements__ is not defined")]
    NoData,
    #[error("current date unavailable")]
    NoClock,
}

impl CalendarError {
    /// Pages without the widget decline quietly; bad data is worth a warning.
    #[must_use]
    pub const fn is_absence(&self) -> bool {
        match self {
            Self::Dom(err) => err.is_absence(),
            Self::NoData => true,
            Self::Source(_) | Self::NoClock => false,
        }
    }
}

/// Build the shared snapshot from the page's record list.
///
/// # Errors
/// [`CalendarError::NoData`] if the global is missing, [`CalendarError::Source`]
/// if it isn't an array of records.
pub fn load_announcements(
    window: &Window,
    today: chrono::NaiveDate,
    upcoming_limit: usize,
) -> Result<Announcements, CalendarError> {
    let records: Vec<EventRecord> =
        read_global(window, ANNOUNCEMENTS_GLOBAL)?.ok_or(CalendarError::NoData)?;
    log::debug!("loaded {} announcements", records.len());
    Ok(Announcements::new(records, today, upcoming_limit))
}

/// Mount the calendar widget, the upcoming list and the modal.
///
/// # Errors
/// Fails when `#calGrid` or the announcement data is missing; other parts
/// are optional and only log when absent.
pub fn install(
    window: &Window,
    document: &Document,
    config: &SiteConfig,
) -> Result<Rc<Announcements>, CalendarError> {
    let grid_root: Element = dom::require(document, GRID_ID)?;
    let today = dom::today().ok_or(CalendarError::NoClock)?;
    let announcements = Rc::new(load_announcements(
        window,
        today,
        config.settings.upcoming_limit,
    )?);

    let on_open = match AnnouncementModal::locate(
        document,
        Rc::clone(&announcements),
        &config.settings.static_prefix,
    ) {
        Ok(modal) => {
            let modal = Rc::new(modal);
            install_dismiss(&modal);
            Callback::from(move |index: usize| modal.open(index))
        }
        Err(err) => {
            log::debug!("{err}; announcement details disabled");
            Callback::noop()
        }
    };

    // Both mounts live as long as the page.
    let _ = yew::Renderer::<CalendarWidget>::with_root_and_props(
        grid_root,
        CalendarWidgetProps {
            announcements: Rc::clone(&announcements),
            initial: None,
            on_open: on_open.clone(),
        },
    )
    .render();

    match dom::require::<Element>(document, UPCOMING_ID) {
        Ok(list_root) => {
            let _ = yew::Renderer::<UpcomingList>::with_root_and_props(
                list_root,
                UpcomingListProps {
                    announcements: Rc::clone(&announcements),
                    on_open,
                },
            )
            .render();
        }
        Err(err) => log::debug!("{err}; upcoming list disabled"),
    }

    Ok(announcements)
}
