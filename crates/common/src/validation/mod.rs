// Validation Module - declarative field checks collected into one error list
use std::fmt;

use serde::Serialize;

mod validators;

pub use validators::{EmailValidator, FieldValidator, StringValidator, UrlValidator};

/// Validation error carrying every failed field check
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    /// Failures in the order the checks ran
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Create a new, empty validation error
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Add a field-level error
    pub fn add_field_error(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            write!(f, "Validation error with no specific field errors")?;
        } else if self.errors.len() == 1 {
            write!(f, "Validation failed: {}", self.errors[0].message)?;
        } else {
            write!(f, "Validation failed with {} errors: ", self.errors.len())?;
            for (i, error) in self.errors.iter().enumerate() {
                if i > 0 {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", error.field, error.message)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Individual field error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Wire name of the field
    pub field: String,
    /// Message reported for the failed check
    pub message: String,
    /// The rejected value, when one was submitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl FieldError {
    /// Create a new field error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into(), value: None }
    }

    /// Record the rejected value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Collects field checks and reports all failures at once
///
/// Each check takes the message to report on failure, so a rule set reads as
/// a table of `(field, check, message)` entries:
///
/// ```
/// use sharehub_common::validation::{EmailValidator, StringValidator, Validator};
///
/// let mut validator = Validator::new();
/// validator.require("name", Some(""), &StringValidator::new().not_empty(), "Name is required.");
/// validator.require("email", None, &EmailValidator::new(), "Invalid Email");
///
/// let err = validator.finalize().unwrap_err();
/// assert_eq!(err.errors.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct Validator {
    errors: ValidationError,
}

impl Validator {
    /// Create a new validator
    pub fn new() -> Self {
        Self { errors: ValidationError::new() }
    }

    /// Add an error
    pub fn add_error(&mut self, error: FieldError) {
        self.errors.add_field_error(error);
    }

    /// Check a field that must be present and pass `validator`
    pub fn require<V>(&mut self, field: &str, value: Option<&str>, validator: &V, message: &str)
    where
        V: FieldValidator<str> + ?Sized,
    {
        match value {
            Some(value) => self.check(field, value, validator, message),
            None => self.add_error(FieldError::new(field, message)),
        }
    }

    /// Check a field only when it was submitted
    pub fn optional<V>(&mut self, field: &str, value: Option<&str>, validator: &V, message: &str)
    where
        V: FieldValidator<str> + ?Sized,
    {
        if let Some(value) = value {
            self.check(field, value, validator, message);
        }
    }

    fn check<V>(&mut self, field: &str, value: &str, validator: &V, message: &str)
    where
        V: FieldValidator<str> + ?Sized,
    {
        if validator.validate(value).is_err() {
            self.add_error(FieldError::new(field, message).with_value(value));
        }
    }

    /// Finalize and return result
    pub fn finalize(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}
