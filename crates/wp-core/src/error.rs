//! Core error types for the timeline engine.

use thiserror::Error;

use crate::traits::Id;

/// Core error type for all engine operations.
#[derive(Error, Debug)]
pub enum WpError {
    #[error("Not found: {entity} with id={id}")]
    NotFound { entity: &'static str, id: Id },

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationErrors),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl WpError {
    /// Short machine-readable code for the error class.
    pub fn error_code(&self) -> &'static str {
        match self {
            WpError::NotFound { .. } => "not_found",
            WpError::InvalidInput(_) => "invalid_input",
            WpError::Store(_) => "store_error",
            WpError::Internal(_) => "internal_error",
        }
    }
}

/// A single validation failure, optionally tied to a field.
///
/// `field` uses dotted/indexed paths for nested entities, e.g.
/// `phases[2].duration_days`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: Option<String>,
    pub message: String,
}

impl ValidationError {
    fn full_message(&self) -> String {
        match &self.field {
            Some(field) => format!("{} {}", field, self.message),
            None => self.message.clone(),
        }
    }
}

/// Ordered collection of validation failures.
///
/// Errors report in the order they were added so messages about indexed
/// fields line up with the input hierarchy.
#[derive(Error, Debug, Default, Clone, PartialEq, Eq)]
#[error("{}", summarize(.entries))]
pub struct ValidationErrors {
    entries: Vec<ValidationError>,
}

fn summarize(entries: &[ValidationError]) -> String {
    if entries.is_empty() {
        return "no errors recorded".to_string();
    }
    entries
        .iter()
        .map(ValidationError::full_message)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an error tied to a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.entries.push(ValidationError {
            field: Some(field.into()),
            message: message.into(),
        });
    }

    /// Add an error not tied to any field.
    pub fn add_base(&mut self, message: impl Into<String>) {
        self.entries.push(ValidationError {
            field: None,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether any error is tied to the given field.
    pub fn has_error(&self, field: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e.field.as_deref() == Some(field))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.entries.iter()
    }

    /// Append all errors from another collection, preserving order.
    pub fn merge(&mut self, other: ValidationErrors) {
        self.entries.extend(other.entries);
    }

    /// Human-readable messages, `field` prefixed where present.
    pub fn messages(&self) -> Vec<String> {
        self.entries.iter().map(ValidationError::full_message).collect()
    }

    /// Consume into a `Result`, erring when any entry was recorded.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}
