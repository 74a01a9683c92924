//! Practice site core
//!
//! Platform-agnostic logic behind the practice website's interactive pieces:
//! the announcements calendar grid, the upcoming-events list, and the small
//! bits of UI state (theme, menu, sections, modal) the browser layer drives.
//! Nothing here touches the DOM, so all of it runs and tests on the host.

pub mod calendar;
pub mod format;
pub mod record;
pub mod scroll;
pub mod settings;
pub mod store;
pub mod theme;
pub mod ui_state;
pub mod upcoming;

// Re-export commonly used types
pub use calendar::{
    DayCell, FillerSide, GridCell, MonthCursor, MonthGrid, MonthStep, days_in_month, iso_date,
    monday_index,
};
pub use format::{long_date, month_label};
pub use record::{EventRecord, indices_on};
pub use settings::{Settings, SettingsError};
pub use store::{MemoryStore, PreferenceStore};
pub use theme::{Theme, ThemePreference};
pub use ui_state::{Disclosure, MenuState, ModalState};
pub use upcoming::{UpcomingEntry, upcoming};

use chrono::NaiveDate;

/// Everything the calendar widget derives from the page's record list.
///
/// The upcoming list is computed once from `today`; only the month grid
/// changes as the user navigates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcements {
    records: Vec<EventRecord>,
    today: NaiveDate,
    upcoming: Vec<UpcomingEntry>,
}

impl Announcements {
    #[must_use]
    pub fn new(records: Vec<EventRecord>, today: NaiveDate, upcoming_limit: usize) -> Self {
        let upcoming = upcoming::upcoming(&records, today, upcoming_limit);
        Self {
            records,
            today,
            upcoming,
        }
    }

    #[must_use]
    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    #[must_use]
    pub fn record(&self, index: usize) -> Option<&EventRecord> {
        self.records.get(index)
    }

    #[must_use]
    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    #[must_use]
    pub fn upcoming(&self) -> &[UpcomingEntry] {
        &self.upcoming
    }

    #[must_use]
    pub fn initial_month(&self) -> MonthCursor {
        MonthCursor::containing(self.today)
    }

    #[must_use]
    pub fn grid(&self, cursor: MonthCursor) -> MonthGrid {
        MonthGrid::build(cursor, self.today, &self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn announcements_start_on_current_month() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 5).expect("valid date");
        let records = vec![
            EventRecord::new("2024-02-04", "past"),
            EventRecord::new("2024-02-05", "today"),
        ];
        let announcements = Announcements::new(records, today, 5);
        assert_eq!(announcements.initial_month(), MonthCursor { year: 2024, month: 1 });
        assert_eq!(announcements.upcoming().len(), 1);
        assert_eq!(
            announcements.record(announcements.upcoming()[0].index).map(|r| r.title.as_str()),
            Some("today")
        );
        let grid = announcements.grid(announcements.initial_month());
        assert_eq!(grid.days().filter(|cell| cell.is_today).count(), 1);
    }
}
