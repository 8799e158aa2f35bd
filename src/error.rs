//! Error taxonomy for collection operations.
//!
//! Fallible operations return [`anyhow::Result`]; the underlying cause is always
//! a [`CollectionError`], so callers that need to branch on the category can
//! `downcast_ref::<CollectionError>()`.
//!
//! Lookup misses (`find`, cache `get`) are not errors and are expressed as
//! `Option`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A configuration or argument problem detected at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// The parameter that failed validation (optional)
    pub field: Option<String>,
    /// Human-readable error message
    pub message: String,
    /// Error code for categorization (optional)
    pub code: Option<String>,
}

impl ValidationError {
    /// Create a new validation error with just a message.
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            field: None,
            message: message.into(),
            code: None,
        }
    }

    /// Create a validation error for a specific parameter.
    pub fn field<S: Into<String>, M: Into<String>>(field: S, message: M) -> Self {
        Self {
            field: Some(field.into()),
            message: message.into(),
            code: None,
        }
    }

    /// Attach an error code.
    #[must_use]
    pub fn with_code<S: Into<String>>(mut self, code: S) -> Self {
        self.code = Some(code.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref field) = self.field {
            write!(f, "[{field}] {}", self.message)?;
        } else {
            write!(f, "{}", self.message)?;
        }
        if let Some(ref code) = self.code {
            write!(f, " (code: {code})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Every failure a collection operation can surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// Malformed operator, missing required configuration.
    Validation(ValidationError),
    /// Two records produced the same key for a unique mapping.
    DuplicateKey { key: String },
    /// A dependent operation was invoked without the state it needs.
    State(String),
    /// `cast` was given structurally incompatible source and target types.
    Conversion(String),
}

impl CollectionError {
    pub fn state<S: Into<String>>(message: S) -> Self {
        Self::State(message.into())
    }

    pub fn conversion<S: Into<String>>(message: S) -> Self {
        Self::Conversion(message.into())
    }

    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "validation failed: {e}"),
            Self::DuplicateKey { key } => write!(f, "duplicate key: {key}"),
            Self::State(msg) => write!(f, "invalid state: {msg}"),
            Self::Conversion(msg) => write!(f, "conversion failed: {msg}"),
        }
    }
}

impl std::error::Error for CollectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ValidationError> for CollectionError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Find the [`CollectionError`] behind an `anyhow::Error`, if there is one.
#[must_use]
pub fn category(err: &anyhow::Error) -> Option<&CollectionError> {
    err.downcast_ref::<CollectionError>()
}
