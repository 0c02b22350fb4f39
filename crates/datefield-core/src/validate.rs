//! Validation of the assembled composite date.
//!
//! Decides whether the submitted state denotes a real calendar date and
//! reports structured, target-tagged errors through the [`Validator`]
//! capability. Emptiness is acceptable here; required-ness is a separate
//! concern owned by the surrounding form.

use datefield_model::{DatePart, FieldMessage, MessageTarget, Validator};

use crate::field::SimpleDateField;
use crate::partial::{days_in_month, is_strict_iso_date};

impl SimpleDateField {
    /// Validates the currently submitted state.
    ///
    /// Returns `true` when the control was never submitted, the submission
    /// was blank, or the composite value is a strict ISO calendar date.
    /// Otherwise reports one error per offending part, plus an overall
    /// "enter a valid date" message, and returns `false`.
    pub fn validate(&self, validator: &mut dyn Validator) -> bool {
        if self.is_empty_submission() {
            return true;
        }

        if self.value().is_some_and(is_strict_iso_date) {
            return true;
        }

        let year = part_int(self.part_value(DatePart::Year));
        let month = part_int(self.part_value(DatePart::Month));
        let day = part_int(self.part_value(DatePart::Day));

        if year == 0 {
            self.report(
                validator,
                MessageTarget::Part(DatePart::Year),
                "SimpleDateField.ErrorMissingYear",
                "Please enter a year",
            );
        }

        if month == 0 {
            self.report(
                validator,
                MessageTarget::Part(DatePart::Month),
                "SimpleDateField.ErrorMissingMonth",
                "Please enter a month",
            );
        } else if month > 12 {
            self.report(
                validator,
                MessageTarget::Part(DatePart::Month),
                "SimpleDateField.ErrorInvalidMonth",
                "Month invalid",
            );
        } else if year != 0
            && let Ok(cal_month) = u32::try_from(month)
            && let Ok(cal_year) = i32::try_from(year)
            && day > i64::from(days_in_month(cal_month, cal_year))
        {
            self.report(
                validator,
                MessageTarget::Part(DatePart::Day),
                "SimpleDateField.ErrorInvalidDay",
                "Day invalid",
            );
        }

        if day == 0 {
            self.report(
                validator,
                MessageTarget::Part(DatePart::Day),
                "SimpleDateField.ErrorMissingDay",
                "Please enter a day",
            );
        }

        // The overall message always accompanies the specific ones, so the
        // composite control has something to display.
        self.report(
            validator,
            MessageTarget::Composite,
            "SimpleDateField.ErrorInvalidDate",
            "Please enter a valid date",
        );

        false
    }

    fn report(
        &self,
        validator: &mut dyn Validator,
        target: MessageTarget,
        key: &str,
        default: &str,
    ) {
        let text = self.locale().localize(key, default);
        validator.validation_error(self.name(), FieldMessage::error(target, text));
    }
}

/// Integer reading of a raw part value; blank or non-numeric input counts
/// as zero, i.e. missing.
fn part_int(value: &str) -> i64 {
    value.trim().parse().unwrap_or(0)
}

/// A collected validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedError {
    pub field: String,
    pub message: FieldMessage,
}

/// Collects validation errors the way a form validator would.
#[derive(Debug, Default)]
pub struct ErrorCollector {
    errors: Vec<CollectedError>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &[CollectedError] {
        &self.errors
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Applies every message collected for the given control back onto it,
    /// routing part-targeted messages to the corresponding sub-fields.
    pub fn apply_to(&self, field: &mut SimpleDateField) {
        for error in &self.errors {
            if error.field == field.name() {
                field.set_message(error.message.clone());
            }
        }
    }
}

impl Validator for ErrorCollector {
    fn validation_error(&mut self, field: &str, message: FieldMessage) {
        self.errors.push(CollectedError {
            field: field.to_string(),
            message,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_int_reads_missing_as_zero() {
        assert_eq!(part_int(""), 0);
        assert_eq!(part_int("abc"), 0);
        assert_eq!(part_int("03"), 3);
        assert_eq!(part_int(" 2019 "), 2019);
    }

    #[test]
    fn collector_accumulates() {
        let mut collector = ErrorCollector::new();
        assert!(!collector.has_errors());

        collector.validation_error(
            "Birthday",
            FieldMessage::error(MessageTarget::Composite, "Please enter a valid date"),
        );
        assert!(collector.has_errors());
        assert_eq!(collector.error_count(), 1);
        assert_eq!(collector.errors()[0].field, "Birthday");
    }
}
