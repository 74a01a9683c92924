//! Tunable behaviour settings
//!
//! Every field has a default, so a page may override any subset of them.
use serde::Deserialize;
use thiserror::Error;

use crate::scroll::{
    DEEP_LINK_DELAY_MS, HEADER_SCROLLED_OFFSET, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD,
    SCROLL_TOP_OFFSET,
};
use crate::theme::DEFAULT_THEME_KEY;
use crate::upcoming::DEFAULT_UPCOMING_LIMIT;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme_storage_key: String,
    pub header_scrolled_offset: f64,
    pub scroll_top_offset: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub deep_link_delay_ms: u32,
    pub upcoming_limit: usize,
    pub static_prefix: String,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme_storage_key: DEFAULT_THEME_KEY.to_string(),
            header_scrolled_offset: HEADER_SCROLLED_OFFSET,
            scroll_top_offset: SCROLL_TOP_OFFSET,
            reveal_threshold: REVEAL_THRESHOLD,
            reveal_root_margin: REVEAL_ROOT_MARGIN.to_string(),
            deep_link_delay_ms: DEEP_LINK_DELAY_MS,
            upcoming_limit: DEFAULT_UPCOMING_LIMIT,
            static_prefix: "static".to_string(),
            log_level: None,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("{field} must be at least 0 (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("reveal_threshold must be between 0 and 1 (got {0})")]
    Threshold(f64),
    #[error("upcoming_limit must be at least 1")]
    ZeroLimit,
    #[error("unknown log level {0:?}")]
    LogLevel(String),
    #[error("JSON parsing error: {0}")]
    Json(String),
}

impl Settings {
    /// Parse and validate settings from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a value is out of range.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self =
            serde_json::from_str(json).map_err(|err| SettingsError::Json(err.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range field.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.theme_storage_key.trim().is_empty() {
            return Err(SettingsError::Empty {
                field: "theme_storage_key",
            });
        }
        for (field, value) in [
            ("header_scrolled_offset", self.header_scrolled_offset),
            ("scroll_top_offset", self.scroll_top_offset),
        ] {
            if value.is_nan() || value < 0.0 {
                return Err(SettingsError::Negative { field, value });
            }
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(SettingsError::Threshold(self.reveal_threshold));
        }
        if self.upcoming_limit == 0 {
            return Err(SettingsError::ZeroLimit);
        }
        if let Some(level) = &self.log_level {
            parse_log_level(level)?;
        }
        Ok(())
    }

    /// Configured log filter, if one was given.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown level name.
    pub fn log_filter(&self) -> Result<Option<log::LevelFilter>, SettingsError> {
        self.log_level.as_deref().map(parse_log_level).transpose()
    }
}

/// Parse a level name case-insensitively.
///
/// # Errors
///
/// Returns an error for an unknown level name.
pub fn parse_log_level(level: &str) -> Result<log::LevelFilter, SettingsError> {
    level
        .trim()
        .parse::<log::LevelFilter>()
        .map_err(|_| SettingsError::LogLevel(level.to_string()))
}
