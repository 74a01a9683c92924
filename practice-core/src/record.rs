//! Announcement records supplied by the page
use chrono::NaiveDate;
use serde::Deserialize;

/// ISO calendar date format used by `EventRecord::date`.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// One announcement as injected by the server template.
///
/// Optional fields arrive either missing or as empty strings; the accessor
/// methods treat both the same way.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct EventRecord {
    pub date: String,
    pub title: String,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

fn present(field: Option<&String>) -> Option<&str> {
    field.map(String::as_str).filter(|s| !s.trim().is_empty())
}

impl EventRecord {
    #[must_use]
    pub fn new(date: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[must_use]
    pub fn time(&self) -> Option<&str> {
        present(self.time.as_ref())
    }

    #[must_use]
    pub fn location(&self) -> Option<&str> {
        present(self.location.as_ref())
    }

    /// Description as raw HTML, or an empty string.
    #[must_use]
    pub fn description_html(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn image(&self) -> Option<&str> {
        present(self.image.as_ref())
    }

    #[must_use]
    pub fn slug(&self) -> Option<&str> {
        present(self.slug.as_ref())
    }

    /// Parse `date` at day granularity.
    ///
    /// Only the zero-padded `YYYY-MM-DD` form counts; anything else yields
    /// `None`, so a record never shows in the upcoming list without also
    /// matching its grid cell.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, ISO_DATE_FORMAT)
            .ok()
            .filter(|date| date.format(ISO_DATE_FORMAT).to_string() == self.date)
    }
}

/// Indices of the records dated exactly `iso_date`, in list order.
#[must_use]
pub fn indices_on(records: &[EventRecord], iso_date: &str) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.date == iso_date)
        .map(|(idx, _)| idx)
        .collect()
}
