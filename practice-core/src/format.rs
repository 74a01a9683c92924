//! Display formatting for calendar labels and dates
use chrono::{Datelike, NaiveDate};

use crate::calendar::MonthCursor;

/// Month header label, e.g. `Февраль 2024`.
#[must_use]
pub fn month_label(cursor: MonthCursor, month_name: &str) -> String {
    format!("{month_name} {}", cursor.year)
}

/// Modal date line: day, lowercased full month name, year.
#[must_use]
pub fn long_date(date: NaiveDate, month_name: &str) -> String {
    format!("{} {} {}", date.day(), month_name.to_lowercase(), date.year())
}
