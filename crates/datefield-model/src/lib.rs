pub mod error;
pub mod input;
pub mod locale;
pub mod message;
pub mod submission;
pub mod value;

pub use error::{FieldError, Result};
pub use input::TextInput;
pub use locale::{DefaultLocale, Localize};
pub use message::{FieldMessage, MessageCast, MessageKind, MessageTarget, Validator};
pub use submission::{DateParts, SubmittedValue};
pub use value::{DateInput, DatePart, DisplayOrder};
