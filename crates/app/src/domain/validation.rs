//! Field validation shared by the record domains.

use thiserror::Error;

/// A field rejected before it reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: ValidationReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationReason {
    #[error("is required")]
    Required,

    #[error("must be at most {0} characters")]
    TooLong(usize),

    #[error("must be a finite, non-negative number")]
    NotANonNegativeNumber,

    #[error("must be greater than zero")]
    NotPositive,

    #[error("is too large")]
    TooLarge,
}

impl ValidationError {
    #[must_use]
    pub const fn new(field: &'static str, reason: ValidationReason) -> Self {
        Self { field, reason }
    }
}

/// Trim a required text field and check its length.
pub(crate) fn required(
    field: &'static str,
    value: &str,
    max_chars: usize,
) -> Result<String, ValidationError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::new(field, ValidationReason::Required));
    }

    within_limit(field, value, max_chars)?;

    Ok(value.to_owned())
}

/// Trim an optional text field; blank input becomes `None`.
pub(crate) fn optional(
    field: &'static str,
    value: Option<&str>,
    max_chars: usize,
) -> Result<Option<String>, ValidationError> {
    let Some(value) = value.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(None);
    };

    within_limit(field, value, max_chars)?;

    Ok(Some(value.to_owned()))
}

pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::new(
            field,
            ValidationReason::NotANonNegativeNumber,
        ))
    }
}

pub(crate) fn positive(field: &'static str, value: u64) -> Result<u64, ValidationError> {
    if value == 0 {
        return Err(ValidationError::new(field, ValidationReason::NotPositive));
    }

    Ok(value)
}

/// Integers are stored as `BIGINT`; reject anything past `i64::MAX`.
pub(crate) fn storable(field: &'static str, value: u64) -> Result<u64, ValidationError> {
    if i64::try_from(value).is_err() {
        return Err(ValidationError::new(field, ValidationReason::TooLarge));
    }

    Ok(value)
}

/// Normalise a search term; blank means "no filter".
pub(crate) fn search_term(term: Option<String>) -> Option<String> {
    term.filter(|term| !term.trim().is_empty())
}

fn within_limit(field: &'static str, value: &str, max_chars: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max_chars {
        return Err(ValidationError::new(
            field,
            ValidationReason::TooLong(max_chars),
        ));
    }

    Ok(())
}
