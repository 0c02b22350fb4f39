//! Splitting and merging of composite date values.
//!
//! The composite control stores its value as a year-month-day string in
//! which any segment may be empty: `"2019--01"` is a year and a day with no
//! month. This module owns that textual shape: splitting a composite value
//! into segments, padding submitted segments, and the calendar checks used
//! during validation.

use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate};
use regex::Regex;

use datefield_model::{DatePart, FieldError, Result};

/// Composite value shape: year, month and day segments joined by hyphens,
/// each segment a possibly empty run of digits.
static COMPOSITE_VALUE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<year>\d*)-(?<month>\d*)-(?<day>\d*)$").expect("invalid composite value regex")
});

/// How unparsable composite values are handled.
///
/// `Strict` is for programmatic assignment and fails loudly. `Lenient` is
/// for user submissions, where a malformed composite degrades to an absent
/// value and is left for validation to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    Strict,
    Lenient,
}

/// The segments captured from a composite value.
///
/// An intermediate representation only: a `PartialDate` may be incomplete
/// and must pass [`is_strict_iso_date`] before being treated as a real
/// calendar date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialDate {
    pub year: String,
    pub month: String,
    pub day: String,
}

impl PartialDate {
    /// Splits a composite value into its segments.
    ///
    /// `Ok(None)` means the value holds no date at all: every segment was
    /// empty, or the value was malformed and the mode is `Lenient`. In
    /// `Strict` mode a malformed value is an error instead.
    pub fn parse(value: &str, mode: ParseMode) -> Result<Option<Self>> {
        let Some(captures) = COMPOSITE_VALUE_REGEX.captures(value) else {
            return match mode {
                ParseMode::Strict => Err(FieldError::InvalidDate(value.to_string())),
                ParseMode::Lenient => {
                    tracing::warn!(value = %value, "discarding unparsable submitted date");
                    Ok(None)
                }
            };
        };

        let parsed = Self {
            year: captures["year"].to_string(),
            month: captures["month"].to_string(),
            day: captures["day"].to_string(),
        };

        if parsed.is_empty() {
            Ok(None)
        } else {
            Ok(Some(parsed))
        }
    }

    /// Whether all three segments are empty.
    pub fn is_empty(&self) -> bool {
        self.year.is_empty() && self.month.is_empty() && self.day.is_empty()
    }

    pub fn part(&self, part: DatePart) -> &str {
        match part {
            DatePart::Year => &self.year,
            DatePart::Month => &self.month,
            DatePart::Day => &self.day,
        }
    }
}

impl fmt::Display for PartialDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}

/// Left-pads `value` to `width` by repeating `unit` and taking the first
/// characters of the repetition, so a two-digit year padded with `"19"`
/// becomes `"1919"` and a single digit becomes `"191" + digit`.
pub(crate) fn pad_left(value: &str, width: usize, unit: &str) -> String {
    let len = value.chars().count();
    if len >= width || unit.is_empty() {
        return value.to_string();
    }
    let padding: String = unit.chars().cycle().take(width - len).collect();
    format!("{padding}{value}")
}

/// Converts a unix timestamp (seconds) to a `YYYY-MM-DD` string in UTC.
pub(crate) fn timestamp_to_iso(secs: i64) -> Option<String> {
    DateTime::from_timestamp(secs, 0).map(|dt| dt.format("%Y-%m-%d").to_string())
}

/// Whether `value` is a complete `YYYY-MM-DD` calendar date.
///
/// Round-trips through a real calendar, so shape-valid but impossible
/// dates (Feb 30) and unpadded segments ("2019-3-05") are both rejected.
pub fn is_strict_iso_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.format("%Y-%m-%d").to_string() == value)
        .unwrap_or(false)
}

/// Number of days in a Gregorian month.
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
