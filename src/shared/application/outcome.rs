//! Uniform outcome of every workflow
//!
//! A workflow returns `AppResult<Outcome<T>>`: the outer `Result` carries
//! infrastructure failures (store unreachable, catalog down), the `Outcome`
//! carries every condition the caller is expected to act upon.

use std::collections::BTreeMap;

use serde::Serialize;

/// Field name -> validation messages, in rule declaration order per field
pub type ValidationErrors = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OutcomeKind {
    Success,
    ValidationError,
    NotFound,
    Conflict,
}

/// Tagged workflow outcome. The value only exists on `Success` and the
/// validation map only exists on `ValidationError`.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    ValidationError(ValidationErrors),
    NotFound(String),
    Conflict(String),
}

impl<T> Outcome<T> {
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Outcome::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Outcome::Conflict(message.into())
    }

    pub fn validation_error(errors: ValidationErrors) -> Self {
        Outcome::ValidationError(errors)
    }

    pub fn kind(&self) -> OutcomeKind {
        match self {
            Outcome::Success(_) => OutcomeKind::Success,
            Outcome::ValidationError(_) => OutcomeKind::ValidationError,
            Outcome::NotFound(_) => OutcomeKind::NotFound,
            Outcome::Conflict(_) => OutcomeKind::Conflict,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Outcome::ValidationError(errors) => Some(errors),
            _ => None,
        }
    }

    /// Human readable error for the failure variants
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Outcome::Success(_) => None,
            Outcome::ValidationError(_) => Some("Validation failed."),
            Outcome::NotFound(message) | Outcome::Conflict(message) => Some(message),
        }
    }
}
