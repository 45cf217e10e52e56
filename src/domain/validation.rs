use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    MissingId { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::MissingId { field } => write!(f, "{field} is required"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Reject values that are empty after trimming. The original value is returned untouched.
pub(crate) fn require_text(
    field: &'static str,
    value: impl Into<String>,
) -> Result<String, ValidationError> {
    let value = value.into();
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(value)
}

pub(crate) fn require_id(field: &'static str, id: u64) -> Result<u64, ValidationError> {
    if id == 0 {
        return Err(ValidationError::MissingId { field });
    }
    Ok(id)
}
