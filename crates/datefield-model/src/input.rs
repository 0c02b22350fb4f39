use std::fmt::Debug;

use crate::message::FieldMessage;

/// A single-line text input capability.
///
/// The composite date control drives its sub-fields exclusively through
/// this interface, so any widget honoring the name/value/message contract
/// can stand in for the default text field.
pub trait TextInput: Debug {
    fn name(&self) -> &str;

    /// Renames the input. The composite control renames replacement
    /// sub-fields to the positional name it expects.
    fn set_name(&mut self, name: &str);

    fn label(&self) -> &str;

    fn value(&self) -> &str;

    fn set_value(&mut self, value: &str);

    fn message(&self) -> Option<&FieldMessage>;

    fn set_message(&mut self, message: FieldMessage);

    fn clear_message(&mut self);

    fn attribute(&self, name: &str) -> Option<&str>;

    /// Sets an arbitrary HTML attribute, e.g. a numeric keyboard hint.
    fn set_attribute(&mut self, name: &str, value: &str);
}
