//! The default sub-field implementation.

use std::collections::BTreeMap;

use datefield_model::{FieldMessage, TextInput};

/// A plain single-line text input.
///
/// The composite date control builds three of these at construction;
/// callers may swap any of them for another [`TextInput`] implementor.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    name: String,
    label: String,
    value: String,
    message: Option<FieldMessage>,
    attributes: BTreeMap<String, String>,
}

impl TextField {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    /// Builder-style attribute assignment.
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }
}

impl TextInput for TextField {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn value(&self) -> &str {
        &self.value
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    fn message(&self) -> Option<&FieldMessage> {
        self.message.as_ref()
    }

    fn set_message(&mut self, message: FieldMessage) {
        self.message = Some(message);
    }

    fn clear_message(&mut self) {
        self.message = None;
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }
}
