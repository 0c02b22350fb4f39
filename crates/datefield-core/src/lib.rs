pub mod container;
pub mod field;
pub mod partial;
pub mod text_field;
pub mod validate;

pub use container::FieldList;
pub use field::SimpleDateField;
pub use partial::{ParseMode, PartialDate, days_in_month, is_leap_year, is_strict_iso_date};
pub use text_field::TextField;
pub use validate::{CollectedError, ErrorCollector};
