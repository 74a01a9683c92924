//! Month grid layout for the announcements calendar
//!
//! The grid always starts on a Monday and is padded with inert cells from the
//! neighbouring months so that it fills whole weeks.
use chrono::{Datelike, NaiveDate};

use crate::record::{EventRecord, indices_on};

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub const DAYS_PER_WEEK: u32 = 7;

#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a zero-based `month` of `year`.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    if month == 1 && is_leap_year(year) {
        29
    } else {
        let index = usize::try_from(month).unwrap_or(usize::MAX);
        DAYS_IN_MONTH.get(index).copied().unwrap_or(30)
    }
}

/// Remap a Sunday-based weekday (0 = Sunday) to a Monday-based one (0 = Monday).
#[must_use]
pub const fn monday_index(native_weekday: i32) -> u32 {
    ((native_weekday - 1) % 7 + 7).unsigned_abs() % 7
}

/// Zero-padded `YYYY-MM-DD` key for a zero-based month.
#[must_use]
pub fn iso_date(year: i32, month: u32, day: u32) -> String {
    format!("{year}-{:02}-{day:02}", month + 1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStep {
    Previous,
    Next,
}

/// The displayed year and zero-based month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthCursor {
    pub year: i32,
    pub month: u32,
}

impl MonthCursor {
    /// Returns `None` when `month` is outside `0..12`.
    #[must_use]
    pub const fn new(year: i32, month: u32) -> Option<Self> {
        if month < 12 {
            Some(Self { year, month })
        } else {
            None
        }
    }

    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
        }
    }

    #[must_use]
    pub const fn previous(self) -> Self {
        if self.month == 0 {
            Self {
                year: self.year - 1,
                month: 11,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        if self.month >= 11 {
            Self {
                year: self.year + 1,
                month: 0,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    #[must_use]
    pub const fn step(self, step: MonthStep) -> Self {
        match step {
            MonthStep::Previous => self.previous(),
            MonthStep::Next => self.next(),
        }
    }

    #[must_use]
    pub fn days(self) -> u32 {
        days_in_month(self.year, self.month)
    }

    #[must_use]
    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
    }

    /// Number of leading cells before day 1 in a Monday-first week.
    #[must_use]
    pub fn leading_blanks(self) -> u32 {
        self.first_day().map_or(0, |first| {
            let native = i32::try_from(first.weekday().num_days_from_sunday()).unwrap_or(0);
            monday_index(native)
        })
    }

    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        self == Self::containing(date)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillerSide {
    Previous,
    Next,
}

/// A day of the displayed month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub iso_date: String,
    pub is_today: bool,
    /// Indices into the record list, in list order.
    pub events: Vec<usize>,
}

impl DayCell {
    #[must_use]
    pub fn has_event(&self) -> bool {
        !self.events.is_empty()
    }

    /// The record opened when the cell body (not a marker) is clicked.
    #[must_use]
    pub fn primary_event(&self) -> Option<usize> {
        self.events.first().copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridCell {
    Filler { day: u32, side: FillerSide },
    Day(DayCell),
}

impl GridCell {
    #[must_use]
    pub const fn day_number(&self) -> u32 {
        match self {
            Self::Filler { day, .. } => *day,
            Self::Day(cell) => cell.day,
        }
    }

    #[must_use]
    pub const fn as_day(&self) -> Option<&DayCell> {
        match self {
            Self::Day(cell) => Some(cell),
            Self::Filler { .. } => None,
        }
    }
}

/// Fully laid-out month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub cursor: MonthCursor,
    pub cells: Vec<GridCell>,
}

impl MonthGrid {
    #[must_use]
    pub fn build(cursor: MonthCursor, today: NaiveDate, records: &[EventRecord]) -> Self {
        let leading = cursor.leading_blanks();
        let days = cursor.days();
        let previous_days = cursor.previous().days();
        let total = leading + days;
        let trailing = (DAYS_PER_WEEK - total % DAYS_PER_WEEK) % DAYS_PER_WEEK;
        let today_day = cursor.contains(today).then(|| today.day());

        let mut cells = Vec::with_capacity(usize::try_from(total + trailing).unwrap_or(42));
        cells.extend(
            (0..leading)
                .rev()
                .map(|offset| GridCell::Filler {
                    day: previous_days - offset,
                    side: FillerSide::Previous,
                }),
        );
        cells.extend((1..=days).map(|day| {
            let iso = iso_date(cursor.year, cursor.month, day);
            GridCell::Day(DayCell {
                day,
                is_today: today_day == Some(day),
                events: indices_on(records, &iso),
                iso_date: iso,
            })
        }));
        cells.extend((1..=trailing).map(|day| GridCell::Filler {
            day,
            side: FillerSide::Next,
        }));

        Self { cursor, cells }
    }

    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter_map(GridCell::as_day)
    }

    #[must_use]
    pub fn day(&self, day: u32) -> Option<&DayCell> {
        self.days().find(|cell| cell.day == day)
    }

    #[must_use]
    pub fn leading_count(&self) -> usize {
        self.cells
            .iter()
            .take_while(|cell| {
                matches!(
                    cell,
                    GridCell::Filler {
                        side: FillerSide::Previous,
                        ..
                    }
                )
            })
            .count()
    }

    #[must_use]
    pub fn trailing_count(&self) -> usize {
        self.cells
            .iter()
            .rev()
            .take_while(|cell| {
                matches!(
                    cell,
                    GridCell::Filler {
                        side: FillerSide::Next,
                        ..
                    }
                )
            })
            .count()
    }
}
