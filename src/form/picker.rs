//! Date picker settings
//!
//! Describes how the client-side date pickers attached to the time inputs
//! are configured. Rendered into the markup as data attributes.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Picker display format (picker syntax, not strftime)
pub const PICKER_DATE_FORMAT: &str = "d/m/y H:i";

/// Configuration of one date picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatePickerSettings {
    pub date_format: &'static str,
    pub enable_time: bool,
    pub time_24hr: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_date: Option<DateTime<Utc>>,
}

impl DatePickerSettings {
    pub fn new(default_date: Option<DateTime<Utc>>) -> Self {
        Self {
            date_format: PICKER_DATE_FORMAT,
            enable_time: true,
            time_24hr: true,
            default_date,
            min_date: None,
        }
    }

    /// Restrict the earliest selectable date
    pub fn with_min_date(mut self, min_date: Option<DateTime<Utc>>) -> Self {
        self.min_date = min_date;
        self
    }
}
