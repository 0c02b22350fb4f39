use thiserror::Error;

#[derive(Debug, Error)]
pub enum FieldError {
    #[error("invalid date: '{0}'; use the YYYY-MM-DD format to prevent this error")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, FieldError>;
