//! The composite date control.
//!
//! Three text sub-fields (day, month, year) together represent one logical
//! date. A caller assigns a composite ISO value and the control splits it
//! across the sub-fields; a form submission delivers raw per-part input and
//! the control normalizes it back into a composite value, tolerating
//! incompleteness. Validation of the assembled date lives in
//! [`crate::validate`].

use tracing::{debug, warn};

use datefield_model::{
    DateInput, DatePart, DefaultLocale, DisplayOrder, FieldError, FieldMessage, Localize,
    MessageTarget, Result, SubmittedValue, TextInput,
};

use crate::container::FieldList;
use crate::partial::{self, ParseMode, PartialDate};
use crate::text_field::TextField;

/// A composite date input split into day, month and year text fields.
///
/// The composite value is stored as a year-month-day string in which any
/// segment may be empty (`"2019--01"`); an absent value means no date.
/// Display order affects the container arrangement only.
#[derive(Debug)]
pub struct SimpleDateField {
    name: String,
    title: Option<String>,
    value: Option<String>,
    raw_value: Option<SubmittedValue>,
    order: DisplayOrder,
    message: Option<FieldMessage>,
    locale: Box<dyn Localize>,
    children: FieldList,
}

impl SimpleDateField {
    /// Creates the control and its three sub-fields, arranged
    /// day-month-year until [`with_order`](Self::with_order) says otherwise.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let locale: Box<dyn Localize> = Box::new(DefaultLocale);
        let children = build_children(&name, DisplayOrder::default(), locale.as_ref());
        Self {
            name,
            title: None,
            value: None,
            raw_value: None,
            order: DisplayOrder::default(),
            message: None,
            locale,
            children,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_order(mut self, order: DisplayOrder) -> Self {
        self.order = order;
        self.reorder_children();
        self
    }

    /// Injects the localization capability and rebuilds the sub-fields so
    /// their labels resolve through it. Inject before customizing
    /// sub-fields; rebuilding discards earlier replacements.
    pub fn with_localizer(mut self, locale: Box<dyn Localize>) -> Self {
        self.locale = locale;
        self.children = build_children(&self.name, self.order, self.locale.as_ref());
        self
    }

    /// Sets the initial composite value; strict about shape, like
    /// [`set_value`](Self::set_value).
    pub fn with_value(mut self, value: impl Into<DateInput>) -> Result<Self> {
        self.set_value(value)?;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn order(&self) -> DisplayOrder {
        self.order
    }

    /// The composite value, or `None` when the control holds no date.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The last raw submission, verbatim.
    pub fn raw_value(&self) -> Option<&SubmittedValue> {
        self.raw_value.as_ref()
    }

    /// The control's own message, as opposed to per-part messages.
    pub fn message(&self) -> Option<&FieldMessage> {
        self.message.as_ref()
    }

    pub fn children(&self) -> &FieldList {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut FieldList {
        &mut self.children
    }

    /// Replaces the display container wholesale. Part accessors resolve
    /// against the new container by sub-field name.
    pub fn set_children(&mut self, children: impl Into<FieldList>) -> &mut Self {
        self.children = children.into();
        self
    }

    pub fn part_field(&self, part: DatePart) -> Option<&dyn TextInput> {
        self.children.by_name(&part.field_name(&self.name))
    }

    pub fn part_field_mut(&mut self, part: DatePart) -> Option<&mut (dyn TextInput + 'static)> {
        let target = part.field_name(&self.name);
        self.children.by_name_mut(&target)
    }

    pub fn day_field(&self) -> Option<&dyn TextInput> {
        self.part_field(DatePart::Day)
    }

    pub fn month_field(&self) -> Option<&dyn TextInput> {
        self.part_field(DatePart::Month)
    }

    pub fn year_field(&self) -> Option<&dyn TextInput> {
        self.part_field(DatePart::Year)
    }

    /// Raw value of one sub-field, blank when the sub-field is missing.
    pub fn part_value(&self, part: DatePart) -> &str {
        self.part_field(part).map(|field| field.value()).unwrap_or("")
    }

    /// Installs a replacement sub-field for the given part. The
    /// replacement is renamed to the positional sub-field name and put in
    /// the display container at the old field's position.
    pub fn set_part_field(&mut self, part: DatePart, mut field: Box<dyn TextInput>) -> &mut Self {
        let target = part.field_name(&self.name);
        field.set_name(&target);
        self.children.replace_by_name(&target, field);
        self
    }

    pub fn set_day_field(&mut self, field: Box<dyn TextInput>) -> &mut Self {
        self.set_part_field(DatePart::Day, field)
    }

    pub fn set_month_field(&mut self, field: Box<dyn TextInput>) -> &mut Self {
        self.set_part_field(DatePart::Month, field)
    }

    pub fn set_year_field(&mut self, field: Box<dyn TextInput>) -> &mut Self {
        self.set_part_field(DatePart::Year, field)
    }

    /// Programmatic composite assignment.
    ///
    /// Accepts nothing, a unix timestamp, or a year-month-day string whose
    /// segments may be empty. Anything else is an error: this entry point
    /// is for canonical values, not user input.
    pub fn set_value(&mut self, value: impl Into<DateInput>) -> Result<&mut Self> {
        self.apply_value(value.into(), ParseMode::Strict)?;
        Ok(self)
    }

    /// Accepts raw per-part form input. Never fails: malformed input
    /// degrades to an absent value for validation to report.
    pub fn set_submitted_value(&mut self, raw: Option<SubmittedValue>) -> &mut Self {
        self.raw_value = raw;
        self.value = None;

        let Some(parts) = self.raw_value.as_ref().and_then(SubmittedValue::parts).cloned()
        else {
            return self;
        };

        // Pad filled parts to their canonical widths; unfilled parts stay
        // blank rather than becoming "00".
        let padded = PartialDate {
            year: pad_part(&parts.year, 4, "19"),
            month: pad_part(&parts.month, 2, "0"),
            day: pad_part(&parts.day, 2, "0"),
        };
        debug!(field = %self.name, value = %padded, "normalized submitted date parts");

        self.set_part_values(&padded);

        // An unfilled part produces an incomplete composite like
        // "2019--01"; lenient parsing keeps it for validation to catch.
        if self
            .apply_value(DateInput::Text(padded.to_string()), ParseMode::Lenient)
            .is_err()
        {
            self.value = None;
        }
        self
    }

    /// Routes a message to its target: part-targeted messages land on the
    /// corresponding sub-field, composite messages on the control itself.
    pub fn set_message(&mut self, message: FieldMessage) -> &mut Self {
        match message.target {
            MessageTarget::Part(part) => match self.part_field_mut(part) {
                Some(field) => field.set_message(message),
                None => warn!(
                    field = %self.name,
                    part = part.suffix(),
                    "no sub-field for message target"
                ),
            },
            MessageTarget::Composite => self.message = Some(message),
        }
        self
    }

    pub fn clear_message(&mut self) -> &mut Self {
        self.message = None;
        self
    }

    pub(crate) fn locale(&self) -> &dyn Localize {
        self.locale.as_ref()
    }

    /// Whether the last submission holds no input at all. A control that
    /// was never submitted counts as empty.
    pub(crate) fn is_empty_submission(&self) -> bool {
        match &self.raw_value {
            None => true,
            Some(value) => value.is_empty(),
        }
    }

    fn apply_value(&mut self, input: DateInput, mode: ParseMode) -> Result<()> {
        let text = match input {
            DateInput::Empty => {
                self.value = None;
                return Ok(());
            }
            // Zero is "no date", not the epoch.
            DateInput::Timestamp(0) => {
                self.value = None;
                return Ok(());
            }
            DateInput::Timestamp(secs) => match partial::timestamp_to_iso(secs) {
                Some(iso) => iso,
                None => match mode {
                    ParseMode::Strict => return Err(FieldError::InvalidDate(secs.to_string())),
                    ParseMode::Lenient => {
                        self.value = None;
                        return Ok(());
                    }
                },
            },
            DateInput::Text(text) if text.is_empty() => {
                self.value = None;
                return Ok(());
            }
            DateInput::Text(text) => text,
        };

        let Some(parsed) = PartialDate::parse(&text, mode)? else {
            self.value = None;
            return Ok(());
        };

        self.value = Some(parsed.to_string());
        self.set_part_values(&parsed);
        Ok(())
    }

    fn set_part_values(&mut self, values: &PartialDate) {
        for part in DatePart::ALL {
            if let Some(field) = self.part_field_mut(part) {
                field.set_value(values.part(part));
            }
        }
    }

    fn reorder_children(&mut self) {
        let mut current = std::mem::take(&mut self.children);
        let mut ordered: Vec<Box<dyn TextInput>> = Vec::with_capacity(current.len());
        for part in self.order.parts() {
            if let Some(field) = current.remove_by_name(&part.field_name(&self.name)) {
                ordered.push(field);
            }
        }
        // Fields a caller added beyond the three parts keep their relative
        // order after them.
        ordered.extend(current.into_inner());
        self.children = FieldList::new(ordered);
    }
}

fn build_children(name: &str, order: DisplayOrder, locale: &dyn Localize) -> FieldList {
    let fields = order
        .parts()
        .into_iter()
        .map(|part| {
            let field = TextField::new(part.field_name(name), part_label(part, locale))
                .with_attribute("inputmode", "numeric")
                .with_attribute("pattern", "[0-9]*");
            Box::new(field) as Box<dyn TextInput>
        })
        .collect();
    FieldList::new(fields)
}

fn part_label(part: DatePart, locale: &dyn Localize) -> String {
    let (key, default) = match part {
        DatePart::Year => ("SimpleDateField.YearLabel", "Year"),
        DatePart::Month => ("SimpleDateField.MonthLabel", "Month"),
        DatePart::Day => ("SimpleDateField.DayLabel", "Day"),
    };
    locale.localize(key, default)
}

fn pad_part(value: &str, width: usize, unit: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        partial::pad_left(value, width, unit)
    }
}
