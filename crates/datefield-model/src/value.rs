use serde::{Deserialize, Serialize};

/// One of the three date components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatePart {
    Year,
    Month,
    Day,
}

impl DatePart {
    /// Storage order: year, month, day.
    pub const ALL: [Self; 3] = [Self::Year, Self::Month, Self::Day];

    /// Positional suffix used in sub-field names and wire keys.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Year => "_Year",
            Self::Month => "_Month",
            Self::Day => "_Day",
        }
    }

    /// Sub-field name derived from the composite field's name.
    pub fn field_name(self, base: &str) -> String {
        format!("{base}[{}]", self.suffix())
    }
}

/// Presentation arrangement of the three sub-fields.
///
/// Affects rendering order only; the composite value is always stored and
/// parsed in year-month-day order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayOrder {
    /// Day, month, year.
    #[default]
    Dmy,
    /// Year, month, day.
    Ymd,
    /// Month, day, year.
    Mdy,
}

impl DisplayOrder {
    /// The parts in presentation order.
    pub fn parts(self) -> [DatePart; 3] {
        match self {
            Self::Dmy => [DatePart::Day, DatePart::Month, DatePart::Year],
            Self::Ymd => [DatePart::Year, DatePart::Month, DatePart::Day],
            Self::Mdy => [DatePart::Month, DatePart::Day, DatePart::Year],
        }
    }
}

/// Acceptable inputs for programmatic value assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// No date.
    Empty,
    /// Unix timestamp in seconds, converted to an ISO date.
    Timestamp(i64),
    /// A year-month-day string, segments possibly empty.
    Text(String),
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for DateInput {
    fn from(value: i64) -> Self {
        Self::Timestamp(value)
    }
}

impl<T: Into<DateInput>> From<Option<T>> for DateInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}
