//! "Upcoming events" summary list
use chrono::{Datelike, NaiveDate};

use crate::record::EventRecord;

pub const DEFAULT_UPCOMING_LIMIT: usize = 5;

/// One row of the upcoming list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpcomingEntry {
    /// Index into the full record list.
    pub index: usize,
    pub date: NaiveDate,
}

impl UpcomingEntry {
    #[must_use]
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    #[must_use]
    pub fn month0(&self) -> u32 {
        self.date.month0()
    }
}

/// Records dated `today` or later, ordered by date and capped at `limit`.
///
/// The sort is stable, so records sharing a date keep their list order.
#[must_use]
pub fn upcoming(records: &[EventRecord], today: NaiveDate, limit: usize) -> Vec<UpcomingEntry> {
    let mut entries: Vec<UpcomingEntry> = records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            record
                .parsed_date()
                .filter(|date| *date >= today)
                .map(|date| UpcomingEntry { index, date })
        })
        .collect();
    entries.sort_by_key(|entry| entry.date);
    entries.truncate(limit);
    entries
}
