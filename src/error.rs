//! Custom error types for the personal assistant
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for assistant operations
#[derive(Error, Debug)]
pub enum AssistantError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// A field was rejected before any mutation took place
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A backing file exists but does not hold the expected structure
    #[error("Corrupt data in {path}: {reason}")]
    CorruptData { path: String, reason: String },

    /// I/O failure while reading or writing persistent state
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Malformed CSV input
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Calculator input outside the arithmetic grammar
    #[error("Invalid expression: {0}")]
    InvalidExpression(String),

    /// Calculator division with a zero divisor
    #[error("Division by zero")]
    DivisionByZero,
}

impl AssistantError {
    /// Create a "not found" error for a record kind
    pub fn not_found(entity_type: &'static str, identifier: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            identifier: identifier.to_string(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came from the calculator
    pub fn is_expression_error(&self) -> bool {
        matches!(self, Self::InvalidExpression(_) | Self::DivisionByZero)
    }

    /// The reason carried by the error, without the category prefix
    pub fn detail(&self) -> String {
        match self {
            Self::Config(msg)
            | Self::Validation(msg)
            | Self::Persistence(msg)
            | Self::Import(msg)
            | Self::Export(msg)
            | Self::InvalidExpression(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl From<std::io::Error> for AssistantError {
    fn from(err: std::io::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for AssistantError {
    fn from(err: serde_json::Error) -> Self {
        Self::Persistence(format!("JSON serialization failed: {}", err))
    }
}

/// Result type alias for assistant operations
pub type AssistantResult<T> = Result<T, AssistantError>;
