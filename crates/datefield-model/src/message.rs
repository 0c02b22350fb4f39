use serde::{Deserialize, Serialize};

use crate::value::DatePart;

/// Message severity, mirroring the form layer's message types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    #[default]
    Error,
    Warning,
    Good,
    Info,
}

/// How the message text should be treated when rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageCast {
    #[default]
    Text,
    Html,
}

/// Where a message should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageTarget {
    /// The composite control itself.
    Composite,
    /// One of the three sub-fields.
    Part(DatePart),
}

/// A display message with an explicit target.
///
/// Produced by validation and consumed by rendering. The target replaces
/// the part-name-prefix convention some form layers use, so no string
/// parsing is involved in routing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMessage {
    pub target: MessageTarget,
    pub text: String,
    #[serde(default)]
    pub kind: MessageKind,
    #[serde(default)]
    pub cast: MessageCast,
}

impl FieldMessage {
    /// An error message with text cast, the common case.
    pub fn error(target: MessageTarget, text: impl Into<String>) -> Self {
        Self {
            target,
            text: text.into(),
            kind: MessageKind::Error,
            cast: MessageCast::Text,
        }
    }
}

/// Error-collection capability of the surrounding form machinery.
///
/// Errors accumulate; reporting one never short-circuits the rest of a
/// validation pass.
pub trait Validator {
    /// Records a validation error against the named field.
    fn validation_error(&mut self, field: &str, message: FieldMessage);
}
