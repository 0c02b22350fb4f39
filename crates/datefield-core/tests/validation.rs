//! Tests for calendar validation of submitted dates.
//!
//! Exercises the error branching: missing parts, impossible months and
//! days, leap years, and the overall invalid-date message that accompanies
//! every failure.

use datefield_core::{ErrorCollector, SimpleDateField};
use datefield_model::{DatePart, DateParts, Localize, MessageTarget, SubmittedValue, TextInput};

fn submitted(year: &str, month: &str, day: &str) -> SimpleDateField {
    let mut field = SimpleDateField::new("Birthday");
    field.set_submitted_value(Some(SubmittedValue::Parts(DateParts::new(year, month, day))));
    field
}

fn targets(collector: &ErrorCollector) -> Vec<MessageTarget> {
    collector.errors().iter().map(|e| e.message.target).collect()
}

fn texts(collector: &ErrorCollector) -> Vec<String> {
    collector.errors().iter().map(|e| e.message.text.clone()).collect()
}

// =========================================================================
// Acceptable states
// =========================================================================

#[test]
fn test_never_submitted_is_valid() {
    let mut field = SimpleDateField::new("Birthday");
    field.set_value("2019--01").expect("incomplete but shape-valid");

    let mut collector = ErrorCollector::new();
    assert!(field.validate(&mut collector));
    assert!(!collector.has_errors());
}

#[test]
fn test_blank_submission_is_valid() {
    let field = submitted("", "", "");

    let mut collector = ErrorCollector::new();
    assert!(field.validate(&mut collector));
    assert!(!collector.has_errors());
}

#[test]
fn test_scalar_submission_is_valid() {
    let mut field = SimpleDateField::new("Birthday");
    field.set_submitted_value(Some(SubmittedValue::Scalar("garbage".to_string())));

    let mut collector = ErrorCollector::new();
    assert!(field.validate(&mut collector));
    assert!(!collector.has_errors());
}

#[test]
fn test_complete_date_is_valid() {
    let field = submitted("2019", "3", "5");

    let mut collector = ErrorCollector::new();
    assert!(field.validate(&mut collector));
    assert!(!collector.has_errors());
}

#[test]
fn test_leap_day_is_valid_in_a_leap_year() {
    let field = submitted("2024", "2", "29");

    let mut collector = ErrorCollector::new();
    assert!(field.validate(&mut collector));
    assert!(!collector.has_errors());
}

// =========================================================================
// Error branching
// =========================================================================

#[test]
fn test_impossible_day_is_reported_against_the_day_part() {
    // 2021 is not a leap year.
    let field = submitted("2021", "2", "30");

    let mut collector = ErrorCollector::new();
    assert!(!field.validate(&mut collector));

    assert_eq!(
        targets(&collector),
        [
            MessageTarget::Part(DatePart::Day),
            MessageTarget::Composite,
        ]
    );
    assert_eq!(texts(&collector), ["Day invalid", "Please enter a valid date"]);
    assert!(collector.errors().iter().all(|e| e.field == "Birthday"));
}

#[test]
fn test_leap_day_is_invalid_off_cycle() {
    let field = submitted("2023", "2", "29");

    let mut collector = ErrorCollector::new();
    assert!(!field.validate(&mut collector));
    assert_eq!(texts(&collector), ["Day invalid", "Please enter a valid date"]);
}

#[test]
fn test_month_beyond_twelve_skips_the_day_check() {
    let field = submitted("2021", "13", "1");

    let mut collector = ErrorCollector::new();
    assert!(!field.validate(&mut collector));

    assert_eq!(
        targets(&collector),
        [
            MessageTarget::Part(DatePart::Month),
            MessageTarget::Composite,
        ]
    );
    assert_eq!(
        texts(&collector),
        ["Month invalid", "Please enter a valid date"]
    );
}

#[test]
fn test_missing_month_is_reported() {
    let field = submitted("2019", "", "1");
    assert_eq!(field.value(), Some("2019--01"));

    let mut collector = ErrorCollector::new();
    assert!(!field.validate(&mut collector));

    assert_eq!(
        targets(&collector),
        [
            MessageTarget::Part(DatePart::Month),
            MessageTarget::Composite,
        ]
    );
}

#[test]
fn test_missing_year_skips_the_day_count_check() {
    let field = submitted("", "3", "31");

    let mut collector = ErrorCollector::new();
    assert!(!field.validate(&mut collector));

    // Only the missing year and the overall message: without a year there
    // is no calendar to check the day against.
    assert_eq!(
        targets(&collector),
        [
            MessageTarget::Part(DatePart::Year),
            MessageTarget::Composite,
        ]
    );
}

#[test]
fn test_missing_day_is_reported() {
    let field = submitted("2019", "3", "");
    assert_eq!(field.value(), Some("2019-03-"));

    let mut collector = ErrorCollector::new();
    assert!(!field.validate(&mut collector));

    assert_eq!(
        targets(&collector),
        [
            MessageTarget::Part(DatePart::Day),
            MessageTarget::Composite,
        ]
    );
    assert_eq!(
        texts(&collector),
        ["Please enter a day", "Please enter a valid date"]
    );
}

#[test]
fn test_only_a_day_reports_both_missing_parts() {
    let field = submitted("", "", "5");

    let mut collector = ErrorCollector::new();
    assert!(!field.validate(&mut collector));

    assert_eq!(
        targets(&collector),
        [
            MessageTarget::Part(DatePart::Year),
            MessageTarget::Part(DatePart::Month),
            MessageTarget::Composite,
        ]
    );
}

#[test]
fn test_non_numeric_parts_count_as_missing() {
    let field = submitted("19x9", "3", "5");
    assert!(field.value().is_none());

    let mut collector = ErrorCollector::new();
    assert!(!field.validate(&mut collector));

    let targets = targets(&collector);
    assert!(targets.contains(&MessageTarget::Part(DatePart::Year)));
    assert!(targets.contains(&MessageTarget::Composite));
}

// =========================================================================
// Message delivery
// =========================================================================

#[test]
fn test_collected_errors_route_back_to_sub_fields() {
    let mut field = submitted("2021", "2", "30");

    let mut collector = ErrorCollector::new();
    assert!(!field.validate(&mut collector));
    collector.apply_to(&mut field);

    assert_eq!(
        field.day_field().and_then(|f| f.message()).map(|m| m.text.as_str()),
        Some("Day invalid")
    );
    assert!(field.month_field().and_then(|f| f.message()).is_none());
    assert_eq!(
        field.message().map(|m| m.text.as_str()),
        Some("Please enter a valid date")
    );
}

#[derive(Debug)]
struct KeyedLocale;

impl Localize for KeyedLocale {
    fn localize(&self, key: &str, _default: &str) -> String {
        key.to_string()
    }
}

#[test]
fn test_error_texts_resolve_through_the_localizer() {
    let mut field = SimpleDateField::new("Birthday").with_localizer(Box::new(KeyedLocale));
    field.set_submitted_value(Some(SubmittedValue::Parts(DateParts::new("2021", "2", "30"))));

    let mut collector = ErrorCollector::new();
    assert!(!field.validate(&mut collector));

    assert_eq!(
        texts(&collector),
        [
            "SimpleDateField.ErrorInvalidDay",
            "SimpleDateField.ErrorInvalidDate",
        ]
    );
}
