use serde::{Deserialize, Serialize};

use crate::value::DatePart;

/// Per-part strings as delivered by form submission.
///
/// Keys absent from the payload deserialize to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateParts {
    #[serde(rename = "_Year", default)]
    pub year: String,
    #[serde(rename = "_Month", default)]
    pub month: String,
    #[serde(rename = "_Day", default)]
    pub day: String,
}

impl DateParts {
    pub fn new(
        year: impl Into<String>,
        month: impl Into<String>,
        day: impl Into<String>,
    ) -> Self {
        Self {
            year: year.into(),
            month: month.into(),
            day: day.into(),
        }
    }

    /// Whether every part is blank.
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

/// Raw value delivered for a composite date field.
///
/// A scalar arrives when the form payload does not carry the per-part map;
/// it holds no usable date input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubmittedValue {
    Parts(DateParts),
    Scalar(String),
}

impl SubmittedValue {
    pub fn parts(&self) -> Option<&DateParts> {
        match self {
            Self::Parts(parts) => Some(parts),
            Self::Scalar(_) => None,
        }
    }

    /// Whether the submission holds no date input. Scalars never do; a
    /// parts map counts only when at least one part is non-blank.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Parts(parts) => parts.is_empty(),
            Self::Scalar(_) => true,
        }
    }
}

impl From<DateParts> for SubmittedValue {
    fn from(parts: DateParts) -> Self {
        Self::Parts(parts)
    }
}
