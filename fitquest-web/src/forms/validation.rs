//! Client-side checks run before any request is sent.

use std::str::FromStr;
use thiserror::Error;

use super::fields::{FieldValue, Parsed};

/// Validation errors that can occur during form validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more required fields are blank
    #[error("Please fill in all required fields.")]
    MissingFields(Vec<&'static str>),
    /// A numeric field holds something that is not a number
    #[error("{0} must be a valid number.")]
    InvalidNumber(&'static str),
}

/// Fails with every blank field named, in declaration order.
pub fn require(fields: &[(&'static str, &FieldValue)]) -> Result<(), ValidationError> {
    let missing = fields
        .iter()
        .filter(|(_, value)| value.is_blank())
        .map(|(name, _)| *name)
        .collect::<Vec<_>>();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields(missing))
    }
}

/// Parses a non-blank numeric field.
pub fn number<T: FromStr>(label: &'static str, value: &FieldValue) -> Result<T, ValidationError> {
    value.parse().ok().ok_or(ValidationError::InvalidNumber(label))
}

/// Parses a non-blank decimal field.
pub fn decimal(label: &'static str, value: &FieldValue) -> Result<f64, ValidationError> {
    match value.parse_decimal() {
        Parsed::Valid(number) => Ok(number),
        Parsed::Invalid => Err(ValidationError::InvalidNumber(label)),
    }
}

/// Parses an optional numeric selection; blank means "none selected".
pub fn optional_number<T: FromStr>(
    label: &'static str,
    value: &FieldValue,
) -> Result<Option<T>, ValidationError> {
    if value.is_blank() {
        Ok(None)
    } else {
        number(label, value).map(Some)
    }
}
