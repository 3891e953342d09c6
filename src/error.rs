//! Error type shared by construction and selection.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
    /// Construction was aborted; no selector exists.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A candidate date could not be parsed. State is left untouched.
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

impl PickerError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        PickerError::Configuration(msg.into())
    }

    pub(crate) fn invalid_field(field: &str) -> Self {
        PickerError::Configuration(format!("invalid {field}"))
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, PickerError::Configuration(_))
    }

    pub fn is_invalid_date(&self) -> bool {
        matches!(self, PickerError::InvalidDate(_))
    }
}

pub type Result<T> = std::result::Result<T, PickerError>;
